//! Forge driver.
//!
//! A [`Session`] owns the interner and configuration shared by one
//! generation run, runs the generation pass, and hands out runtime builders
//! and pools for the specs it produced.
//!
//! Enable logging with `RUST_LOG=forge_synth=debug` (or `trace` for
//! per-parameter classification) after calling [`init_tracing`].

mod session;

pub use session::{render_diagnostics, Session};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
