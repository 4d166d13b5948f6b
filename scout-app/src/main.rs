use anyhow::Result;
use scout_bot::AppConfig;
use scout_common::observability::{init_logging, LogConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let log_path = init_logging(LogConfig {
        app_name: "scout",
        emit_stderr: true,
        ..LogConfig::default()
    })?;

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(target: "app.startup", error = %err, "startup configuration invalid");
            return Err(err.into());
        }
    };

    info!(target: "app.startup", log_file = %log_path.display(), "market scout starting");
    scout_bot::run(config).await
}
