use clap::Parser;
use nodelog::transport::{into_transport, JsonLinesSink};
use nodelog::{registry, LogLevel, LoggerConfig};
use std::io::BufRead;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nodelog", about = "Log stdin lines through the nodelog facade")]
struct Cli {
    /// TOML config file layered over the built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Node name stamped on every record (overrides the config).
    #[arg(long)]
    node: Option<String>,

    /// Minimum level that gets through (overrides the config).
    #[arg(long)]
    min_level: Option<LogLevel>,

    /// Level each input line is logged at.
    #[arg(long, default_value = "info")]
    level: LogLevel,

    /// Forward every record to stdout as a JSON line.
    #[arg(long)]
    json: bool,

    /// Disable the coloured stderr output.
    #[arg(long)]
    no_local: bool,

    /// Write nodelog's own diagnostics to stderr (filter with RUST_LOG).
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("nodelog diagnostics enabled");
    }

    let mut config = match &cli.config {
        Some(path) => LoggerConfig::load_from(path)?,
        None => LoggerConfig::defaults(),
    };
    if let Some(node) = cli.node {
        config.logger.node_name = node;
    }
    if let Some(level) = cli.min_level {
        config.logger.min_level = level;
    }
    if cli.no_local {
        config.logger.local_output = false;
    }

    let transport = cli
        .json
        .then(|| into_transport(JsonLinesSink::new(std::io::stdout())));
    registry::init_from_config(&config, transport);
    tracing::debug!(node = %config.logger.node_name, min_level = %config.logger.min_level, "logger ready");

    let logger = registry::instance();
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        logger.log(cli.level, &line, None);
    }
    tracing::debug!(records = logger.next_seq(), "stdin closed");
    Ok(())
}
