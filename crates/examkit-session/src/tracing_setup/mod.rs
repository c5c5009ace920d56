//! Subscriber installation and span definitions.

pub mod spans;

use examkit_core::constants::LOG_ENV_VAR;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Install a JSON subscriber on stderr, filtered by `EXAMKIT_LOG`
/// (default `info`). Returns false if a subscriber was already set.
pub fn init_tracing() -> bool {
    let directives = std::env::var(LOG_ENV_VAR).unwrap_or_else(|_| DEFAULT_FILTER.to_string());
    init_tracing_with_filter(&directives)
}

/// Install a JSON subscriber with explicit filter directives. Invalid
/// directives fall back to `info`.
pub fn init_tracing_with_filter(directives: &str) -> bool {
    let filter = EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_reports_false() {
        let _ = init_tracing_with_filter("examkit=debug,[not a directive");
        assert!(!init_tracing_with_filter("info"));
    }
}
