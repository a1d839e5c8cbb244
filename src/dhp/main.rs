use clap::Parser;

mod cli;
use cli::args::Cli;

fn main() {
    let args = Cli::parse();
    init_logging(args.verbose);

    if let Err(e) = cli::run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

// Logs go to stderr so the menu transcript on stdout stays clean.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
