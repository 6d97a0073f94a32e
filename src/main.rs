//! Operadora router shell server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Browser deep link            ┌──────────────────────────────────────────┐
//!     ─────────────────────────────┼─▶ http server ─▶ history ─▶ route table │
//!                                  │                   (base)     (match)    │
//!                                  │                                 │       │
//!                                  │                                 ▼       │
//!     App shell HTML               │                          views (props)  │
//!     ◀────────────────────────────┼── response ◀─────────────────────┘       │
//!                                  │                                          │
//!                                  │  config (TOML + BASE_URL) · observability│
//!                                  └──────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use operadora_router::config;
use operadora_router::observability::logging;
use operadora_router::{RouteTable, ShellServer};

#[derive(Parser)]
#[command(name = "operadora-router")]
#[command(about = "Serve the operadoras app shell with clean-path deep links", long_about = None)]
struct Cli {
    /// Path to a TOML config file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = config::load(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init(&config.observability.log_level);
    tracing::info!("operadora-router v{} starting", env!("CARGO_PKG_VERSION"));

    let table = Arc::new(RouteTable::from_config(&config.routes)?);
    let routes = table.len();
    let server = ShellServer::new(config, table);

    let config = server.config();
    tracing::info!(
        bind_address = %config.listener.bind_address,
        base_path = %config.history.base_path,
        routes,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
