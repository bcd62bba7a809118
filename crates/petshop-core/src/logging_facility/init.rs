//! Process-wide subscriber setup, selected by [`Profile`]

use std::sync::Once;

use serde::Deserialize;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// `[logging] profile` in the engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    #[default]
    Development,
    Production,
    /// Events go to the in-memory test capture
    Test,
}

static INIT_ONCE: Once = Once::new();

const DEVELOPMENT_FILTER: &str = "petshop_core=debug,petshop_store=debug,petshop_engine=debug";
const PRODUCTION_FILTER: &str = "petshop_core=info,petshop_store=info,petshop_engine=info";

fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global subscriber for `profile`
///
/// Only the first call per process has an effect. `RUST_LOG` overrides the
/// profile's default filter. If the host application already installed a
/// subscriber, it is left in place.
///
/// - `Development`: human-readable lines, debug and up
/// - `Production`: one JSON object per event, info and up
/// - `Test`: the in-memory capture from [`super::init_test_capture`]
///
/// # Example
///
/// ```
/// use petshop_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter_or(DEVELOPMENT_FILTER))
                .finish()
                .try_init();
        }
        Profile::Production => {
            let _ = tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter_or(PRODUCTION_FILTER))
                .finish()
                .try_init();
        }
        Profile::Test => {
            super::init_test_capture();
        }
    });
}
