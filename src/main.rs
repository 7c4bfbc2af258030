use clap::Parser;
use ideas::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = ideas::tui::run(&cli.db) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
