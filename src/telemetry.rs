//! Opt-in log output for the input controller.
//!
//! Gesture tracing is chatty (one `trace!` per pointer move), so nothing is
//! installed unless the embedding page asks for it through the `telemetry`
//! feature. Pages that already run a subscriber just skip these helpers.

/// Filter used when `RUST_LOG` is unset: rejected host effects and
/// suppressed clicks stay visible, per-move traces do not.
pub const DEFAULT_TRACE_DIRECTIVES: &str = "remote_scroll=debug,warn";

/// Installs a compact global subscriber honoring `RUST_LOG`, falling back to
/// [`DEFAULT_TRACE_DIRECTIVES`].
///
/// `false` means nothing was installed: either the feature is off or a
/// global subscriber already exists.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_directives(DEFAULT_TRACE_DIRECTIVES)
}

/// Same as [`init_default_tracing`] with caller-chosen fallback directives.
#[must_use]
pub fn init_tracing_with_directives(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .without_time()
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "telemetry"))]
    #[test]
    fn disabled_feature_installs_nothing() {
        assert!(!init_default_tracing());
        assert!(!init_tracing_with_directives("trace"));
    }

    #[cfg(feature = "telemetry")]
    #[test]
    fn second_install_is_refused() {
        let _ = init_tracing_with_directives("off");
        assert!(!init_default_tracing());
    }
}
