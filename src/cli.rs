use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "gitward",
    version,
    about = "Advisory auditor for git workflow conventions"
)]
pub struct Cli {
    /// Repository to audit (defaults to the current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(long, help = "Skip the network fetch before the remote comparison")]
    pub no_fetch: bool,
}
