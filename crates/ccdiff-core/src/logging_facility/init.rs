//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output, warnings and errors only unless `RUST_LOG` says otherwise
    Development,
    /// JSON structured output at info level
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

impl Profile {
    /// Filter directives used when `RUST_LOG` is not set
    pub fn default_directives(&self) -> &'static str {
        match self {
            Profile::Development => "ccdiff_core=warn,ccdiff_cli=warn",
            Profile::Production => "ccdiff_core=info,ccdiff_cli=info",
            Profile::Test => "off",
        }
    }
}

static INIT_ONCE: Once = Once::new();

fn env_filter(profile: Profile) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(profile.default_directives()))
}

/// Initialize the logging facility
///
/// Call once at startup; later calls are no-ops.
///
/// # Example
///
/// ```
/// use ccdiff_core::logging_facility::{init, Profile};
///
/// init(Profile::Production);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(env_filter(profile))
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(env_filter(profile))
                .init();
        }
        Profile::Test => {
            // Capture is installed separately via init_test_capture()
            tracing_subscriber::registry().init();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_idempotent() {
        init(Profile::Test);
        init(Profile::Test);
    }

    #[test]
    fn test_default_directives_scope_to_workspace_crates() {
        assert!(Profile::Development
            .default_directives()
            .contains("ccdiff_core=warn"));
        assert!(Profile::Production
            .default_directives()
            .contains("ccdiff_cli=info"));
    }
}
