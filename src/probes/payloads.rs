pub struct PayloadSet;

impl PayloadSet {
    pub const SQL_INJECTION: &'static [&'static str] = &["' OR '1'='1", "1; DROP TABLE users--"];

    pub const CROSS_SITE_SCRIPTING: &'static [&'static str] = &["<script>alert(1)</script>"];
}
