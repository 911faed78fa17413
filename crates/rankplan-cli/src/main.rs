//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via bootstrap.
//! Command dispatch routes to handlers which delegate to the core `Editor`.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use rankplan_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // Dispatch to appropriate handler
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = CliConfig::from_env_and_flags(cli.data_dir, cli.key_prefix);

    match command {
        // Paths never opens the store
        Commands::Paths => handlers::paths::execute(&config.settings()),
        Commands::Rank { command } => handlers::rank::execute(&mut bootstrap(config)?, command),
        Commands::Plan { command } => handlers::plan::execute(&mut bootstrap(config)?, command),
        Commands::Assignment { command } => {
            handlers::assignment::execute(&mut bootstrap(config)?, command)
        }
        Commands::Marker { command } => {
            handlers::marker::execute(&mut bootstrap(config)?, command)
        }
        Commands::Chart { json, at } => handlers::chart::execute(&bootstrap(config)?, json, at),
        Commands::Clear { yes } => handlers::clear::execute(&mut bootstrap(config)?, yes),
    }
}

fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        std::process::exit(code);
    }
}
