use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Where console log output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// HTTP server: stdout with colors
    Server,
    /// Console commands: stderr, stdout is left for the report
    Console,
}

/// Initialize the tracing subscriber
///
/// Logs go to:
/// - stdout (Server) or stderr (Console)
/// - logs/attrmap.log next to the exe (no colors)
///
/// The level comes from RUST_LOG, otherwise from the configuration.
pub fn initialize(default_level: &str, target: LogTarget) -> anyhow::Result<()> {
    let verbose = target == LogTarget::Server;
    if verbose {
        println!("========================================");
        println!("  LOGGING SYSTEM INITIALIZATION");
        println!("========================================\n");
    }

    let log_dir = match std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("logs")))
    {
        Some(dir) => dir,
        None => std::path::Path::new("target").join("logs"),
    };

    std::fs::create_dir_all(&log_dir)
        .map_err(|e| anyhow::anyhow!("Cannot create log directory {}: {}", log_dir.display(), e))?;

    let log_file_path = log_dir.join("attrmap.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)
        .map_err(|e| anyhow::anyhow!("Cannot open log file {}: {}", log_file_path.display(), e))?;

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string());
    if verbose {
        println!("✓ Log file path: {}", log_file_path.display());
        println!("✓ Log level: {}", log_level);
    }

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false);

    let registry = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(log_level))
        .with(file_layer);

    match target {
        LogTarget::Server => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogTarget::Console => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }

    if verbose {
        println!("✓ Tracing subscriber initialized");
        println!("========================================\n");
    }

    Ok(())
}
