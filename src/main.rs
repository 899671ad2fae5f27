mod config;
mod error;
mod report;
mod route_table;
mod routes;

use std::io::IsTerminal;

use anyhow::Context;
use config::Config;
use route_table::RouteTable;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // stdout carries the report line only
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    tracing::info!("serve-files starting");

    let config = Config::from_env();
    config.log_startup();

    let table = RouteTable::standard().context("invalid built-in route table")?;
    tracing::debug!(
        "Route table loaded: {} routes, default {}",
        table.route_count(),
        table.default_path()
    );

    let path = route_table::resolve(&config.server_id, &table);
    tracing::info!("Resolved '{}' to {}", config.server_id, path);

    report::report(&mut std::io::stdout().lock(), path)
        .context("failed to write report to stdout")?;

    Ok(())
}
