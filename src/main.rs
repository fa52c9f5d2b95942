use clap::Parser;
use tick::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = tick::tui::run(&cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
