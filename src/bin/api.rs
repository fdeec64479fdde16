use std::sync::Arc;

use dispo::api::handler;
use dispo::core::config::AppConfig;
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    dispo::setup_logging();

    let config = Arc::new(AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        lambda_runtime::Error::from(e)
    })?);

    lambda_runtime::run(lambda_runtime::service_fn(move |event| {
        let config = Arc::clone(&config);
        async move { handler(&config, event).await }
    }))
    .await
}
