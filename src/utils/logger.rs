//! stderr logging for the CLI.

use tracing_subscriber::EnvFilter;

/// Env var holding a tracing filter directive, e.g. `ESTACION_LOG=debug`
pub const LOG_ENV: &str = "ESTACION_LOG";

const DEFAULT_LEVEL: &str = "warn";

/// Install the global subscriber.
///
/// `--verbose` wins over everything else; otherwise `ESTACION_LOG`, then the
/// config file's `log_level`, then `warn`.
pub fn init(verbose: bool, config_level: Option<&str>) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(config_level.unwrap_or(DEFAULT_LEVEL)))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .init();
}
