//! Console logging of verification events.
//!
//! Installs a `tracing` subscriber that prints the events emitted by the
//! verification entry points. Enabled with the `console` feature.
//!
//! ## Log Levels
//!
//! - **DEBUG**: Failed checks (label, expected, actual) and pending checks
//! - **TRACE**: Passing checks

use std::sync::OnceLock;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use vouch_config::VerificationConfig;

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes console output with the default filter.
///
/// Safe to call multiple times - only the first call has effect.
pub fn init() {
    init_with(&VerificationConfig::default());
}

/// Initializes console output using the filter from `config`.
///
/// `RUST_LOG` takes precedence over the configured filter. Safe to call
/// multiple times - only the first call has effect, and an already
/// installed global subscriber is left in place.
pub fn init_with(config: &VerificationConfig) {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init();
    });
}
