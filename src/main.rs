use clap::Parser;
use gstsettlement::cli_io::CliOptions;
use gstsettlement::constants::DEFAULT_LOG_FILTER;
use gstsettlement::GstError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<(), GstError> {
    init_tracing();
    let cli_options = CliOptions::parse();
    let engine = cli_options.build_engine()?;
    engine.execute_cli(&cli_options)
}
