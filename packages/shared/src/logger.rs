//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// The filter defaults to `<bin_name>=<default_level>,tower_http=<default_level>`
/// and can be overridden with the `RUST_LOG` environment variable.
///
/// # Arguments
///
/// * `bin_name` - Name of the running binary, used as the filter target
/// * `default_level` - Log level applied when `RUST_LOG` is not set
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let bin_name = bin_name.replace('-', "_");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{bin_name}={default_level},tower_http={default_level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
