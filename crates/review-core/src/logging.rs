//! Tracing subscriber setup.
//!
//! Library code only emits events; binaries, benches and tests call
//! [`init`] once to see them. The filter comes from `REVIEW_LOG`
//! (standard `EnvFilter` syntax) and falls back to `info`.

use tracing_subscriber::{fmt, EnvFilter};

use crate::constants::LOG_ENV_VAR;

/// Install the global subscriber with an `info` fallback filter.
///
/// Returns `false` if a subscriber was already installed.
pub fn init() -> bool {
    init_with_default("info")
}

/// Install the global subscriber, using `default_directive` when
/// `REVIEW_LOG` is unset or unparsable.
pub fn init_with_default(default_directive: &str) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_noop() {
        init_with_default("warn");
        assert!(!init());
    }
}
