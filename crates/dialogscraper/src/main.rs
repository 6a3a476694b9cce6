mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Replay {
            script,
            config,
            save_path,
        } => commands::replay::run(&script, config.as_deref(), save_path.as_deref()),
        Commands::Show { file } => commands::show::run(&file),
        Commands::Config { config } => commands::config::run(config.as_deref()),
        Commands::Version => commands::version::run(),
    }
}
