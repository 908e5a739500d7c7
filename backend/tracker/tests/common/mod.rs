use tracker::{Config, Tracker};

/// Fresh in-memory tracker with migrations applied. Logging honours
/// `RUST_LOG` so a failing run can be replayed verbosely.
pub async fn test_tracker() -> anyhow::Result<Tracker> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    Ok(Tracker::from_config(&Config::in_memory()).await?)
}
