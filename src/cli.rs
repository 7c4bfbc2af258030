use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "ideas", about = concat!("[*] ideas v", env!("CARGO_PKG_VERSION"), " - keep your ideas in order"), version)]
pub struct Cli {
    /// Path to the ideas database
    #[arg(short = 'd', long = "db", default_value = "ideas.db")]
    pub db: PathBuf,
}
