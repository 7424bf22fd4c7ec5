use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("api error: {0}")]
    Api(#[from] monobank::MonoError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("webhook was rejected")]
    WebhookRejected,
}
