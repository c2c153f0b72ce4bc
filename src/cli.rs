use std::path::PathBuf;

use clap::Parser;

/// Terminal contact form that relays submissions to an external form.
#[derive(Debug, Parser)]
#[command(name = "contactform", version, about)]
pub struct Cli {
    /// Config file (default: <config dir>/contactform/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the endpoint URL submissions are posted to
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Log file (default: <cache dir>/contactform/contactform.log)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
