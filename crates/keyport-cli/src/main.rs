//! Keyport CLI - Imports credential exchange payloads into a vault
//!
//! Wires the CXF decoder and the vault HTTP client into the import
//! orchestrator and runs one import per invocation.

mod commands;

use clap::{Parser, Subcommand};
use commands::ImportCommand;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Layer};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "KEYPORT_LOG_LEVEL", global = true)]
    log_level: String,

    /// Log format: compact, full
    #[arg(
        long,
        default_value = "compact",
        env = "KEYPORT_LOG_FORMAT",
        global = true
    )]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a credential exchange payload
    Import(ImportCommand),
}

/// Filter used when RUST_LOG is not set: keyport crates at `level`, dependencies at warn
fn default_filter(level: &str) -> String {
    format!(
        "keyport={level},\
         keyport_import={level},\
         keyport_import_types={level},\
         keyport_import_cxf={level},\
         keyport_vault_client={level},\
         h2=warn,\
         hyper=warn,\
         reqwest=warn,\
         rustls=warn",
        level = level
    )
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // If RUST_LOG is set, use it directly; otherwise use our default filter
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::try_from_default_env()?
    } else {
        EnvFilter::try_new(default_filter(&cli.log_level))?
    };

    let fmt_layer = match cli.log_format.as_str() {
        "full" => tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_writer(std::io::stderr)
            .boxed(),
        _ => tracing_subscriber::fmt::layer() // "compact" or any other value
            .compact()
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_writer(std::io::stderr)
            .boxed(),
    };

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);
    tracing::subscriber::set_global_default(subscriber)?;

    let code = match cli.command {
        Commands::Import(import_cmd) => import_cmd.execute()?,
    };

    std::process::exit(code);
}
