// File: crates/skycast-chart/src/telemetry.rs
// Summary: Opt-in tracing subscriber setup for binaries embedding the renderer.

/// Route the renderer's layout, export and bad-value events to stderr.
///
/// Verbosity follows `RUST_LOG` and falls back to `info`, which shows one line
/// per rendered chart and per written file. Without the `telemetry` feature,
/// or when the host already installed a subscriber, this is a no-op returning
/// `false`.
#[cfg(feature = "telemetry")]
#[must_use]
pub fn init_default_tracing() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .is_ok()
}

#[cfg(not(feature = "telemetry"))]
#[must_use]
pub fn init_default_tracing() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_is_refused() {
        let _ = init_default_tracing();
        assert!(!init_default_tracing());
    }
}
