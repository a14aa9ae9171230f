//! Diagnostic logging setup.
//!
//! Alerts and toasts are for the operator; everything else goes through
//! `tracing`. Filtering follows `RUST_LOG` when set.

use tracing_subscriber::EnvFilter;

pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,mealdesk_client=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
