use clap::Parser;
use miette::Result;
use teamart::cli::{Cli, Commands};
use teamart::config::Config;
use teamart::output::Printer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Generate(args) => {
            let config = Config::discover(cli.config.as_deref(), std::path::Path::new("."))?;
            teamart::cli::generate::run(args, &config, &printer)?
        }
        Commands::Teams(args) => {
            let config = Config::discover(cli.config.as_deref(), std::path::Path::new("."))?;
            teamart::cli::teams::run(args, &config, &printer)?
        }
        Commands::Kinds(args) => teamart::cli::kinds::run(args)?,
        Commands::Completions(args) => teamart::cli::completions::run(args)?,
    }

    Ok(())
}

/// Log to stderr, filtered by `TEAMART_LOG` (default: warn).
fn init_tracing() {
    let env_filter = EnvFilter::try_from_env("TEAMART_LOG").unwrap_or_else(|_| "warn".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
