//! Tracing setup for the server process.

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn,todo_server=info,todo_store=info,tower_http=info";

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to info for this crate, the store and request
/// tracing, warn for everything else. Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=todo_store=debug,todo_server=debug cargo run -p todo-server
/// ```
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .compact(),
        )
        .init();
}
