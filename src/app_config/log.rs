use dotenv::dotenv;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, FmtSubscriber, Layer};

use crate::app_config::env::env_or_default;

/// Set up logging: console formatter locally, daily rolling files elsewhere.
/// The returned guards must be held for the lifetime of the process so the
/// non-blocking writers flush on shutdown.
pub fn setup_logging() -> anyhow::Result<Vec<WorkerGuard>> {
    dotenv().ok();
    let app_env = env_or_default("APP_ENV", "LOCAL");

    if app_env == "LOCAL" {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::INFO)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        Ok(Vec::new())
    } else {
        let info_file = RollingFileAppender::new(Rotation::DAILY, "log_files", "info.log");
        let error_file = RollingFileAppender::new(Rotation::DAILY, "log_files", "error.log");

        let (info_non_blocking, info_guard) = tracing_appender::non_blocking(info_file);
        let (error_non_blocking, error_guard) = tracing_appender::non_blocking(error_file);

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(info_non_blocking)
                    .with_filter(EnvFilter::new("info")),
            )
            .with(
                fmt::layer()
                    .with_writer(error_non_blocking)
                    .with_filter(EnvFilter::new("error")),
            )
            .init();

        Ok(vec![info_guard, error_guard])
    }
}
