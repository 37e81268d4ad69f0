//! Diagnostic logging to stderr

use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// Environment variable holding a tracing filter, e.g. `DEVJ_LOG=debug`
pub const LOG_ENV: &str = "DEVJ_LOG";

fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level(verbose).into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(true), LevelFilter::DEBUG);
        assert_eq!(default_level(false), LevelFilter::WARN);
    }

    #[test]
    fn test_init_twice() {
        init(false);
        init(true);
    }
}
