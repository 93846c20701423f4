//! Shared test-init helper for the integration test binaries: installs a
//! `tracing-subscriber` `fmt` layer so `tracing::trace!`/`debug!` output from
//! `lowmem_ac::automaton` surfaces under `RUST_LOG=lowmem_ac=trace cargo test
//! -- --nocapture`.

use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new(
                std::env::var("RUST_LOG").unwrap_or_else(|_| "trace".into()),
            ))
            .with_test_writer()
            .try_init();
    });
}
