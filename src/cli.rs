use clap::{Parser, Subcommand};

use crate::config::DEFAULT_TIMEOUT_SECS;

#[derive(Parser)]
#[command(name = "postscan")]
#[command(version, about = "Replay an API collection against a live target and probe for injection flaws")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Scan {
        #[arg(short, long)]
        collection: String,

        #[arg(short, long)]
        url: String,

        #[arg(long, env = "POSTSCAN_EMAIL")]
        email: Option<String>,

        #[arg(long, env = "POSTSCAN_PASSWORD", hide_env_values = true)]
        password: Option<String>,

        #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_SECS)]
        timeout: u64,

        #[arg(short, long)]
        output: Option<String>,

        #[arg(long)]
        html: Option<String>,

        #[arg(short, long)]
        verbose: bool,
    },

    Report {
        #[arg(short, long)]
        input: String,

        #[arg(short, long, default_value = "html")]
        format: String,

        #[arg(short, long)]
        output: Option<String>,
    },

    Parse {
        #[arg(short, long)]
        collection: String,
    },
}
