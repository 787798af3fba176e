//! Scheme Indenter CLI
//!
//! Library half of the `scmi` binary: option parsing and the command
//! implementations, kept out of `main.rs` so they can be tested without
//! spawning a process.

use std::sync::Once;

pub mod commands;
mod error;
pub mod options;

pub use error::CliError;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
