//! Tracing setup for the client binary. The library itself only emits events.

use tracing_subscriber::EnvFilter;

/// Maps `-v` counts to a filter directive.
pub fn filter_for(verbosity: u8, quiet: bool) -> &'static str {
    match verbosity {
        0 if quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "info,builder_pattern=debug",
        _ => "trace",
    }
}

/// Installs a fmt subscriber. `RUST_LOG` wins over the verbosity flags.
pub fn init(verbosity: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for(verbosity, quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_levels() {
        assert_eq!(filter_for(0, true), "error");
        assert_eq!(filter_for(0, false), "warn");
        assert_eq!(filter_for(1, false), "info");
        assert!(filter_for(2, true).contains("builder_pattern=debug"));
        assert_eq!(filter_for(7, false), "trace");
    }
}
