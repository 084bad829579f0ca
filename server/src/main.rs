use std::sync::Arc;

use clap::Parser;
use env_logger::Env;
use log::{debug, info};
use personnel::config::{self, AppConfiguration};
use personnel::ApplicationRuntimeBuilder;

use crate::cli::{LogLevel, Opts};

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();
    configure_logging(opts.verbosity);

    let config = effective_configuration(&opts)?;
    if opts.write_config {
        let path = opts.config.unwrap_or_else(config::configuration_file);
        config::save(&config, &path)?;
        println!("Configuration written to {}", path.to_string_lossy());
        return Ok(());
    }

    let listen = config.server.listen.clone();
    let runtime = tokio::task::spawn_blocking(move || {
        ApplicationRuntimeBuilder::new().with_config(config).build()
    })
    .await??;

    let listener = tokio::net::TcpListener::bind(&listen).await?;
    info!("Server running on http://{}", listener.local_addr()?);
    axum::serve(listener, personnel_server::app(Arc::new(runtime))).await?;

    Ok(())
}

fn effective_configuration(opts: &Opts) -> anyhow::Result<AppConfiguration> {
    let mut config = config::load(opts.config.as_deref())?;
    if let Some(listen) = &opts.listen {
        config.server.listen.clone_from(listen);
    }
    if let Some(database) = &opts.database {
        config.database.path = database.to_string_lossy().to_string();
    }
    debug!("Effective configuration {config:?}");
    Ok(config)
}

fn configure_logging(verbosity: Option<LogLevel>) {
    // If nothing else was specified in RUST_LOG, use 'info'
    env_logger::Builder::from_env(
        Env::default().default_filter_or(verbosity.map_or_else(|| "info".to_string(), |lvl| lvl.to_string())),
    )
    .init();
    debug!("Logging started");
}
