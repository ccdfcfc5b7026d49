//! Tracing setup.
//!
//! - `FLASHSTUDY_LOG` holds filter directives (e.g. "debug" or
//!   "info,flashstudy=trace,reqwest=debug").
//! - `FLASHSTUDY_LOG_FORMAT` selects "pretty" (default) or "json".

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "FLASHSTUDY_LOG";
pub const LOG_FORMAT_ENV: &str = "FLASHSTUDY_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info,flashstudy=debug";

pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    // try_init: a second call (tests, embedding) keeps the first subscriber
    let result = match std::env::var(LOG_FORMAT_ENV).as_deref() {
        Ok("json") => builder.json().try_init(),
        _ => builder.try_init(),
    };
    if let Err(e) = result {
        eprintln!("Tracing already initialised: {e}");
    }
}
