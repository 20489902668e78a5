//! Process-wide logging setup.

use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use tracing_subscriber::{fmt, EnvFilter};

use crate::SdkError;

/// Install a `fmt` subscriber filtered by `RUST_LOG`.
///
/// Fails if a global subscriber is already set. The library crates only
/// emit events; nothing is printed until an application calls this.
pub fn init_logger() -> Result<(), SdkError> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .map_err(|e| SdkError::Logger(e.to_string()))
}
