//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system.
///
/// Reads `RUST_LOG` for filtering; safe to call from any host binary
/// before the first manager is constructed.
pub fn init() {
    env_logger::Builder::from_default_env()
        .format_timestamp_millis()
        .init();
}
