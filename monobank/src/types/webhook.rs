use serde::{Deserialize, Serialize};

/// Body of the webhook registration call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    pub web_hook_url: String,
}

impl WebhookRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            web_hook_url: url.into(),
        }
    }
}
