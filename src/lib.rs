//! Accessibility Build
//!
//! Non-UI core of the Accessibility Build learning app: WCAG contrast
//! evaluation, the Contrast Hero game and local score tracking. The
//! presentation layer calls into these crates with plain color values and
//! renders the ratios, verdicts and scores they return.
//!
//! # Crates
//!
//! - [`contrast`] - luminance, contrast ratio and WCAG thresholds
//! - [`app_core`] - Contrast Hero sessions, scores and configuration
//! - [`storage`] - key-value store backing persisted scores

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use app_core;
pub use contrast;
pub use storage;

use tracing_subscriber::EnvFilter;

/// Install a formatted tracing subscriber filtered by `RUST_LOG`
///
/// Falls back to `info` when `RUST_LOG` is unset or invalid. Returns `false`
/// if a global subscriber was already installed.
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).try_init().is_ok()
}
