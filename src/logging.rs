//! Tracing subscriber setup
//!
//! The library only emits `tracing` events; games call [`init`] once at
//! startup to see them. `GAMEBOX_LOG` overrides the filter.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "GAMEBOX_LOG";

/// Install a fmt subscriber. Calling it again is a no-op.
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init("warn");
        init("debug");
        tracing::info!("still running");
    }
}
