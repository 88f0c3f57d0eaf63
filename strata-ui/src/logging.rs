//! Default `tracing` subscriber for hosts and demos.
//!
//! Components only emit `tracing` events; installing a subscriber is left to
//! the embedding application. [`init_tracing`] is the one strata hosts use.

/// Installs a formatted `tracing` subscriber.
///
/// The filter is read from `RUST_LOG` and falls back to
/// `error,strata_components=info`. Calling this more than once is harmless:
/// later calls leave the first subscriber in place.
pub fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("error,strata_components=info") {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}
