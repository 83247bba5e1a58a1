//! Diagnostic logging.
//!
//! Everything meant for the user goes through [`crate::ui::Ui`]; tracing
//! events are for troubleshooting and go to stderr.
//!
//! Filter priority: `RUST_LOG` > `--debug` > [`DEFAULT_LEVEL`].

use tracing_subscriber::EnvFilter;

/// Level used when neither RUST_LOG nor --debug is given
pub const DEFAULT_LEVEL: &str = "warn";

/// Pick the filter directive for this run
pub fn filter_directive(rust_log: Option<&str>, debug_flag: bool) -> String {
    match rust_log {
        Some(directive) if !directive.trim().is_empty() => directive.to_string(),
        _ if debug_flag => "debug".to_string(),
        _ => DEFAULT_LEVEL.to_string(),
    }
}

/// Initialise the global subscriber. Call once, from `main`.
pub fn init(debug_flag: bool) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(rust_log.as_deref(), debug_flag);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    // try_init: a second initialisation (tests) is not an error worth surfacing
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        filter = %directive,
        "logging initialised"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_priority() {
        assert_eq!(filter_directive(Some("trace"), false), "trace");
        assert_eq!(filter_directive(Some("info"), true), "info");
        assert_eq!(filter_directive(None, true), "debug");
        assert_eq!(filter_directive(Some("  "), true), "debug");
        assert_eq!(filter_directive(None, false), DEFAULT_LEVEL);
    }
}
