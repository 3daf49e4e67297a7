//! Log output for the CLI
//!
//! Library crates log through the `log` facade. The fmt subscriber installed
//! here also bridges those records, so everything lands on stderr with one
//! filter. `SF_LOG` takes `EnvFilter` directives (e.g. `sf_load=debug`);
//! without it the level is `info`, or `debug` with `--verbose`.

use tracing_subscriber::EnvFilter;

pub(crate) const LOG_ENV: &str = "SF_LOG";

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

pub(crate) fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .try_init();

    if let Err(e) = result {
        eprintln!("[warn] Logging already initialized: {}", e);
    }
}
