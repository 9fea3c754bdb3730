//! filter-chain command line tool.
//!
//! Validates deployment descriptors and shows the filter chain a given
//! dispatch would get.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde_json::json;

use filter_chain::config::watcher::ConfigWatcher;
use filter_chain::config::{load_config, DeploymentConfig};
use filter_chain::mapping::store::run_reload_loop;
use filter_chain::matching::UrlPatternKind;
use filter_chain::observability::logging;
use filter_chain::{ChainBuilder, Dispatch, DispatcherType, MappingStore, MappingTable, MatchTarget};

#[derive(Parser)]
#[command(name = "filter-chain")]
#[command(about = "Inspect servlet filter mappings and the chains they build", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a deployment descriptor and list its mappings
    Check {
        /// Path to the TOML descriptor
        config: PathBuf,
    },
    /// Print the filter chain for one dispatch as JSON
    Resolve {
        /// Path to the TOML descriptor
        config: PathBuf,
        /// Context-relative request path
        #[arg(short, long)]
        path: Option<String>,
        /// Target servlet name; without it no chain is built
        #[arg(short, long)]
        servlet: Option<String>,
        #[arg(short, long, default_value = "REQUEST")]
        dispatcher: DispatcherType,
    },
    /// Keep the mapping table live, reloading on change, until Ctrl+C
    Watch {
        /// Path to the TOML descriptor
        config: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { config } => {
            let config = load(&config)?;
            print_summary(&config);
        }
        Commands::Resolve {
            config,
            path,
            servlet,
            dispatcher,
        } => {
            let config = load(&config)?;
            let handler = match servlet.as_deref() {
                Some(name) => Some(Arc::new(
                    config
                        .servlet(name)
                        .cloned()
                        .ok_or_else(|| format!("unknown servlet '{name}'"))?,
                )),
                None => None,
            };

            let dispatch = Dispatch {
                request_path: path.as_deref(),
                servlet_name: servlet.as_deref(),
                dispatcher_type: dispatcher,
            };
            let builder = ChainBuilder::new(Arc::new(MappingTable::from_config(&config)));

            let output = match builder.build(handler, &dispatch)? {
                Some(chain) => json!({
                    "servlet": chain.handler().name,
                    "dispatcher": dispatcher,
                    "filters": chain.filters().iter().map(|f| &**f).collect::<Vec<_>>(),
                }),
                None => serde_json::Value::Null,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Commands::Watch { config: path } => {
            let config = load(&path)?;
            let store = Arc::new(MappingStore::new(MappingTable::from_config(&config)));

            let (watcher, updates) = ConfigWatcher::new(&path);
            let handle = watcher.run()?;
            let reload = tokio::spawn(run_reload_loop(store.clone(), updates));

            tokio::signal::ctrl_c().await?;
            tracing::info!(generation = store.generation(), "Shutdown signal received");

            // Dropping the watcher closes the update channel and ends the loop.
            drop(handle);
            reload.await?;
        }
    }

    Ok(())
}

fn load(path: &Path) -> Result<DeploymentConfig, Box<dyn std::error::Error>> {
    let config = load_config(path)?;
    logging::init(&config.observability)?;
    tracing::debug!(
        path = ?path,
        filters = config.filters.len(),
        servlets = config.servlets.len(),
        mappings = config.filter_mappings.len(),
        "Descriptor loaded"
    );
    Ok(config)
}

fn print_summary(config: &DeploymentConfig) {
    let table = MappingTable::from_config(config);
    println!(
        "OK: {} filters, {} servlets, {} mappings",
        table.filter_count(),
        config.servlets.len(),
        table.len()
    );
    for (i, mapping) in table.mappings().iter().enumerate() {
        let target = match mapping.target() {
            MatchTarget::Url(pattern) => {
                format!("url '{}' ({})", pattern, UrlPatternKind::classify(pattern))
            }
            MatchTarget::ServletName(name) => format!("servlet '{}'", name),
        };
        let types: Vec<&str> = mapping.dispatcher_types().iter().map(DispatcherType::as_str).collect();
        println!("  #{:<3} {:<20} {} [{}]", i, mapping.filter_name(), target, types.join(", "));
    }
}
