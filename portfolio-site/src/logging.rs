use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// `tower_http=debug` surfaces the `TraceLayer` request spans.
const DEFAULT_FILTER: &str = "info,tower_http=debug";

/// Installs the global `fmt` subscriber. `RUST_LOG` overrides the default filter.
pub fn setup_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();

    // a subscriber may already be installed (tests, embedding)
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return;
    }

    info!("Logging initialized");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn default_filter_parses_and_enables_request_spans() {
        let filter = EnvFilter::try_new(DEFAULT_FILTER).unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn setup_is_idempotent() {
        setup_logging();
        setup_logging();
    }
}
