use clap::Parser;
use matcache::cli::{Cli, Commands};
use matcache::types::config::Config;
use matcache::MatcacheResult;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> MatcacheResult<()> {
    let cli = Cli::parse();

    // Load configuration first (no logging yet)
    let config = if cli.config.exists() {
        Config::load(&cli.config).unwrap_or_else(|_| Config::default_config())
    } else {
        Config::default_config()
    };

    // Determine log level: CLI flags take precedence over config
    let log_level = if cli.quiet {
        "error".to_string()
    } else if cli.verbose {
        "debug".to_string()
    } else {
        config.general.log_level.clone()
    };

    // Initialize logging with appropriate level
    let filter = EnvFilter::from_default_env().add_directive(
        format!("matcache={}", log_level)
            .parse()
            .unwrap_or_else(|_| "matcache=info".parse().expect("fallback directive is valid")),
    );

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    tracing::debug!("Configuration loaded from: {}", cli.config.display());

    match cli.command {
        Commands::Invert { file, repeat } => {
            matcache::cli::commands::invert_cmd(&file, repeat, &config)?;
        }
        Commands::Demo => {
            matcache::cli::commands::demo(&config)?;
        }
        Commands::Init { path } => {
            matcache::cli::commands::init(path)?;
        }
        Commands::Version => {
            matcache::cli::commands::version();
        }
    }

    Ok(())
}
