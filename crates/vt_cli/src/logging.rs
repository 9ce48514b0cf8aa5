use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Installs the global subscriber. `RUST_LOG` wins over the verbosity flag.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    INIT.call_once(|| {
        if tracing::dispatcher::has_been_set() {
            return;
        }
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
            )
            .with_writer(std::io::stderr)
            .init();
    });
}
