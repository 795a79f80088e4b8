#![doc(test(attr(deny(warnings))))]

//! Homedash Core turns static utility billing records and vehicle service logs
//! into chart-ready series and stat roll-ups for a read-only household dashboard.

pub mod chart;
pub mod errors;
pub mod format;
pub mod records;
pub mod storage;
pub mod summary;
pub mod table;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("homedash_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("Homedash Core tracing initialized.");
    });
}
