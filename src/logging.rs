// File: src/logging.rs
//! Subscriber setup shared by the binaries. Logs go to stderr so stdout
//! stays free for protocol and frame output.
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Parses a `RUST_LOG`-style `spec`, falling back to `default` when the spec
/// names no directives. A level in the spec always wins over the default.
pub fn filter_from(spec: &str, default: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default.into())
        .parse_lossy(spec)
}

/// Installs the fmt subscriber, reading `RUST_LOG` with `default` as fallback.
pub fn init(default: LevelFilter) {
    let spec = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(filter_from(&spec, default))
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_applies_without_a_spec() {
        assert_eq!(filter_from("", LevelFilter::INFO).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn spec_level_overrides_the_default() {
        assert_eq!(
            filter_from("debug", LevelFilter::INFO).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(
            filter_from("warn", LevelFilter::INFO).max_level_hint(),
            Some(LevelFilter::WARN)
        );
    }
}
