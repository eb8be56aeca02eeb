use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Installs the global fmt subscriber. Logs go to stderr so stdout stays free
/// for command output.
pub fn init(crate_name: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install subscriber for {crate_name}: {e}"))
}

#[macro_export]
macro_rules! init_tracing {
    () => {
        $crate::tracing::init(env!("CARGO_PKG_NAME"))
    };
}
