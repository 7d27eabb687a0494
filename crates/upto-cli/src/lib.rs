//! upto CLI - command line tools for GuidePace and trail search.
//!
//! Binaries:
//! - guidepace: estimate a route locally or through the server
//! - trail_search: query the server's trail search

pub mod client;
pub mod report;

pub use client::UptoClient;

/// Log to stderr so stdout stays clean for `--json` output.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}
