//! Tracing setup for the search core.
//!
//! Embedders that already install their own subscriber keep it; the
//! initializer here only claims the global default when nobody else has.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install a formatting subscriber honoring `RUST_LOG`, once per process.
pub fn initialize() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    });
}
