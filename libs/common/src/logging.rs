//! Logging bootstrap
//!
//! One-call tracing initialization for binaries and test harnesses
//! embedding the GridPulse core. Library crates only emit through the
//! `tracing` macros and never install a subscriber themselves.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// The filter is taken from `RUST_LOG` when set, falling back to `info`
/// for the whole process. Safe to call once per process; a second call
/// returns without touching the installed subscriber.
///
/// # Arguments
/// * `default_directive` - Filter used when `RUST_LOG` is unset (e.g. `"info"`)
pub fn init_logging(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true));

    // try_init so embedding callers (and test binaries) that already
    // installed a subscriber are not clobbered
    if subscriber.try_init().is_err() {
        tracing::debug!("Tracing subscriber already installed, keeping existing one");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_logging("info");
        // Second call must not panic even though a subscriber exists
        init_logging("debug");
    }
}
