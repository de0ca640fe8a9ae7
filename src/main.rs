use gptest::ControllerConfig;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Exit status is 0 regardless of how the tester stopped.
    if let Err(e) = gptest::run(ControllerConfig::default()) {
        error!("{}", e);
    }
}
