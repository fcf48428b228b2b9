//! HNY command line
//!
//! Library half of the `hny` binary: subcommand bodies and the terminal
//! adapters for clipboard, share and navigation.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod commands;
pub mod terminal;

/// Initialize stderr logging filtered by `RUST_LOG` (default `warn`)
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
