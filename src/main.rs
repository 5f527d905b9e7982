use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use moviedeck::args::Args;
use moviedeck::config::Config;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    args.apply(&mut config);

    if config.catalog.api_key.is_empty() {
        anyhow::bail!(
            "no catalog API key configured; set catalog.api_key in {}, pass --api-key, or export TMDB_API_KEY",
            Config::config_path().display()
        );
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    moviedeck::ui::run(config, runtime.handle().clone())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();
}
