pub mod domain;
pub mod routes;
pub mod shared;
pub mod system;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use shared::config::{load_config, Config};
use shared::introspection::get_registry;
use system::api::state::AppState;
use system::tracing::LogTarget;

#[derive(Parser)]
#[command(name = "attrmap")]
#[command(about = "Static metadata introspection and reporting", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config.toml (default: next to the executable)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve,
    /// Print the developer annotation report of one entity
    Report {
        /// Simple or fully qualified entity name
        #[arg(default_value = "SampleService")]
        entity: String,
        /// Call the sample service methods after the report
        #[arg(long)]
        run_sample: bool,
    },
    /// Print the metadata map of all controllers as JSON
    Map,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (config, source) = load_config(cli.config.as_deref())?;

    let command = cli.command.unwrap_or(Commands::Serve);
    let target = match command {
        Commands::Serve => LogTarget::Server,
        Commands::Report { .. } | Commands::Map => LogTarget::Console,
    };
    system::tracing::initialize(&config.logging.level, target)?;
    source.log();

    match command {
        Commands::Serve => serve(config).await,
        Commands::Report { entity, run_sample } => {
            let text = get_registry().text_report(&entity)?;
            print!("{}", text);

            if run_sample {
                println!("Running SampleService methods:");
                domain::sample_service::run_sample();
            }
            Ok(())
        }
        Commands::Map => {
            let map = get_registry().build_metadata_map(
                config.introspection.origin_system_name(),
                &config.introspection.options(),
            );
            println!("{}", serde_json::to_string_pretty(&map)?);
            Ok(())
        }
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    let addr = config.server.socket_addr()?;
    let registry = get_registry();
    tracing::info!(
        "Registry ready: {} entities, {} controllers",
        registry.entities().len(),
        registry.controllers().count()
    );

    let app = routes::configure_routes(AppState::from_config(&config));

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
