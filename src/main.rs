use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use artie_lens::EXIT_SUCCESS;
use artie_lens::cli::{Cli, Commands};
use artie_lens::commands::{run_init, run_lens};

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::InvalidSubcommand | ErrorKind::MissingSubcommand) => {
            println!("⚠️  Invalid command");
            std::process::exit(EXIT_SUCCESS);
        }
        Err(e) => e.exit(),
    };

    init_tracing(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Init(args) => run_init(args, cli.quiet),
        Commands::Run(args) => run_lens(args, cli.color.into(), cli.quiet),
    };

    std::process::exit(exit_code);
}
