pub mod endpoints;

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;

/// Header carrying the personal access token.
pub const TOKEN_HEADER: &str = "X-Token";

/// A fully resolved request handed to an [`Executor`].
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// Value of the `X-Token` header; empty for unauthenticated calls.
    pub token: String,
    pub json: Option<Value>,
}

/// Raw response returned by an [`Executor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Parse the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Body as lossy UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Performs the network I/O for the client.
///
/// Errors are returned as-is to the caller of the failing operation.
#[async_trait]
pub trait Executor: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse>;
}

/// reqwest-backed [`Executor`] for the Monobank REST API.
#[derive(Debug, Clone, Default)]
pub struct MonoHttpClient {
    client: Client,
}

impl MonoHttpClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl Executor for MonoHttpClient {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        let mut builder = self
            .client
            .request(request.method, &request.url)
            .header(TOKEN_HEADER, request.token);

        // GET requests may carry a body too (webhook registration).
        if let Some(json) = &request.json {
            builder = builder.json(json);
        }

        let resp = builder.send().await?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await?.to_vec();

        Ok(ApiResponse { status, body })
    }
}
