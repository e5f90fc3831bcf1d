use clap::Parser;
use spmat::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
