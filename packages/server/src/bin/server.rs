//! Critmass game server binary.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin critmass-server
//! ```

use clap::Parser;

use critmass_shared::setup_logger;

/// Authoritative server for the Critmass chain-reaction game
#[derive(Debug, Parser)]
#[command(name = "critmass-server", version, about)]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 3001)]
    port: u16,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "debug")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    // Run the server
    if let Err(e) = critmass_server::run_server(&args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
