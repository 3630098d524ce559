use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use std::sync::Arc;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use postscan::cli::{Cli, Commands};
use postscan::{
    AuthManager, CollectionLoader, ConsoleReporter, EndpointExecutor, HtmlExporter, HttpClient,
    JsonExporter, ProbeRegistry, ScanConfig, ScanReporter, Scanner, SessionState, Transport,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            collection,
            url,
            email,
            password,
            timeout,
            output,
            html,
            verbose,
        } => {
            init_tracing(verbose);
            let config = ScanConfig::new(collection, &url, email, password, timeout)?;
            run_scan(config, output, html, verbose).await
        }
        Commands::Report {
            input,
            format,
            output,
        } => {
            init_tracing(false);
            run_report(&input, &format, output)
        }
        Commands::Parse { collection } => {
            init_tracing(false);
            let endpoints = CollectionLoader::new().load_file(&collection)?;
            ConsoleReporter::print_endpoints(&endpoints);
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "postscan=debug" } else { "postscan=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run_scan(
    config: ScanConfig,
    output: Option<String>,
    html: Option<String>,
    verbose: bool,
) -> Result<()> {
    println!("{} Loading collection from {}", "[*]".cyan(), config.collection_path);
    let endpoints = CollectionLoader::new()
        .load_file(&config.collection_path)
        .context("Failed to load collection")?;
    println!("{} Found {} endpoints", "[*]".cyan(), endpoints.len());

    let transport: Arc<dyn Transport> = Arc::new(HttpClient::new(config.timeout_secs)?);
    let session = SessionState::new(&config.base_url);

    let session = match &config.credentials {
        Some(credentials) => {
            println!("{} Authenticating as {}", "[*]".cyan(), credentials.identifier);
            let (session, error) = AuthManager::new(Arc::clone(&transport))
                .authenticate_session(&session, credentials)
                .await;
            match error {
                None => println!("{} Authentication successful", "[+]".green()),
                Some(e) => {
                    warn!(error = %e, "authentication failed");
                    println!("{} Authentication failed: {}", "[-]".red(), e);
                }
            }
            session
        }
        None => session,
    };

    if !session.is_authenticated() {
        println!(
            "{} No token set. Running unauthenticated; expect elevated failure rates.",
            "[!]".yellow()
        );
    }

    let executor = EndpointExecutor::new(Arc::clone(&transport), ProbeRegistry::with_defaults());
    let scanner = Scanner::new(executor).with_progress(verbose);

    println!("\n{}", "Starting scan".bold());
    let run = scanner.scan_all(&endpoints, &session).await;

    let summary = ScanReporter::report_run(&run.accumulator, session.base_url(), run.duration_ms);
    ConsoleReporter::print_summary(&summary);

    if let Some(path) = output {
        JsonExporter::export(&summary, &path)?;
        println!("Results saved to {}", path);
    }

    if let Some(path) = html {
        HtmlExporter::export(&summary, &path)?;
        println!("HTML report saved to {}", path);
    }

    Ok(())
}

fn run_report(input: &str, format: &str, output: Option<String>) -> Result<()> {
    let summary = JsonExporter::load(input)?;

    match format {
        "html" => {
            let path = output.unwrap_or_else(|| "report.html".to_string());
            HtmlExporter::export(&summary, &path)?;
            println!("Report saved to {}", path);
        }
        "json" => {
            let path = output.unwrap_or_else(|| "report.json".to_string());
            JsonExporter::export(&summary, &path)?;
            println!("Report saved to {}", path);
        }
        "console" => ConsoleReporter::print_summary(&summary),
        other => bail!("Unknown format: {}. Use html, json or console", other),
    }

    Ok(())
}
