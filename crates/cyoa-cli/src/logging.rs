//! Log setup. Logs go to stderr so they never mix with the story on stdout.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an explicit filter, e.g. `CYOA_LOG=debug`.
pub const LOG_ENV: &str = "CYOA_LOG";

/// Install the global subscriber.
///
/// `CYOA_LOG` wins when set and valid; otherwise each `-v` raises the level
/// one step from `warn`.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn default_directive(verbose: u8) -> &'static str {
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
    fn verbosity_levels() {
        assert_eq!(default_directive(0), "warn");
        assert_eq!(default_directive(1), "info");
        assert_eq!(default_directive(2), "debug");
        assert_eq!(default_directive(9), "trace");
    }
}
