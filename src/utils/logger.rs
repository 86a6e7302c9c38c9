use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn default_filter(verbose: bool, level: Option<&str>) -> String {
    match (verbose, level) {
        (true, _) => "small_calc=debug,info".to_string(),
        (false, Some(level)) => format!("small_calc={}", level),
        (false, None) => "small_calc=info".to_string(),
    }
}

/// Installs the global subscriber. `RUST_LOG` takes precedence over `level`.
pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose, level)));

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
