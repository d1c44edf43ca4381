//! bintest CLI entry point

fn main() {
    // Logs go to stderr; stdout carries banners and test output only
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    bintest::cli::run();
}
