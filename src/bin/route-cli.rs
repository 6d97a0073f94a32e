use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use operadora_router::config;
use operadora_router::observability::logging;
use operadora_router::routing::Params;
use operadora_router::{Navigator, RouteTable, WebHistory};

#[derive(Parser)]
#[command(name = "route-cli")]
#[command(about = "Inspect and exercise the operadoras route table", long_about = None)]
struct Cli {
    /// Path to a TOML config file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the history base path.
    #[arg(short, long)]
    base_path: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List declared routes in matching order
    Routes,
    /// Resolve an address to its view and props
    Resolve {
        /// Full address, e.g. /operadora/12345678000190?aba=despesas
        location: String,
    },
    /// Build the address for a named route
    Href {
        /// Route name, e.g. details
        name: String,
        /// Route param as key=value (repeatable)
        #[arg(short, long = "param", value_parser = parse_key_val)]
        params: Vec<(String, String)>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = config::load(cli.config.as_deref())?;
    if let Some(base) = cli.base_path {
        config.history.base_path = base;
    }
    logging::init(&config.observability.log_level);

    let table = Arc::new(RouteTable::from_config(&config.routes)?);
    let mut navigator = Navigator::new(table, WebHistory::new(&config.history.base_path));

    let output: Value = match cli.command {
        Commands::Routes => {
            let routes: Vec<_> = navigator.table().routes().collect();
            json!({
                "base": navigator.history().base(),
                "routes": routes,
            })
        }
        Commands::Resolve { location } => serde_json::to_value(navigator.push(&location)?)?,
        Commands::Href { name, params } => {
            let params: Params = params.into_iter().collect();
            let href = navigator.href(&name, &params)?;
            json!({
                "href": href,
                "view": navigator.table().get(&name).map(|route| route.view),
            })
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("invalid param {s:?}, expected key=value"))
}
