//! Log output for the CLI.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a log filter, e.g. `FAASIT_LOG=faasit_spec=debug`.
pub const LOG_ENV: &str = "FAASIT_LOG";

/// Install the global subscriber, writing to stderr.
///
/// `FAASIT_LOG` wins over the `-v` count when set.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(0), "warn");
        assert_eq!(default_level(1), "info");
        assert_eq!(default_level(2), "debug");
        assert_eq!(default_level(7), "trace");
    }
}
