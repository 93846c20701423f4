//! Test-only tracing setup: installs a `tracing-subscriber` `fmt` layer
//! filtered by `RUST_LOG` (falling back to `trace`) so the `tracing::trace!`/
//! `debug!` calls in [`crate::automaton`] surface under
//! `RUST_LOG=lowmem_ac=trace cargo test -- --nocapture`.

use std::sync::Once;

static INIT: Once = Once::new();

pub(crate) fn init() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new(
                std::env::var("RUST_LOG").unwrap_or_else(|_| "trace".into()),
            ))
            .with_test_writer()
            .try_init();
    });
}
