use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. Logs go to stderr so reports stay clean on stdout.
pub fn init_cli_logger(debug: bool) {
    let filter = if debug {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("garden_advisor=debug"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("garden_advisor=warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
