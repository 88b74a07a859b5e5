//! Logger set-up for the library and the binary.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Environment variable holding an `env_logger` filter, e.g. `forager=debug`.
pub const LOG_ENV: &str = "FORAGER_LOG";

/// Initializes the global logger.
///
/// A filter in [`LOG_ENV`] wins. Otherwise `verbose` selects debug output and
/// the default shows info and above.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let env = Env::default().filter_or(LOG_ENV, level.to_string());
    let mut builder = Builder::from_env(env);
    builder.format_timestamp_millis();

    // `try_init` only fails if a logger was already set. Tests may call
    // `init` more than once.
    let _ = builder.try_init();
}
