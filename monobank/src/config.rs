use crate::error::{MonoError, Result};

/// Production API host.
pub const DEFAULT_HOST: &str = "api.monobank.ua";

/// Environment variable holding the personal access token.
pub const TOKEN_ENV: &str = "MONOBANK_TOKEN";

/// Environment variable overriding the API host.
pub const HOST_ENV: &str = "MONOBANK_HOST";

/// Configuration for the Monobank client.
#[derive(Debug, Clone)]
pub struct MonoConfig {
    /// Personal access token sent in `X-Token`. Public endpoints work without it.
    pub token: Option<String>,
    /// API host without scheme (e.g. `api.monobank.ua`).
    pub base_host: String,
}

impl Default for MonoConfig {
    fn default() -> Self {
        Self {
            token: None,
            base_host: DEFAULT_HOST.into(),
        }
    }
}

impl MonoConfig {
    pub fn new(token: Option<String>, base_host: Option<String>) -> Self {
        Self {
            token,
            base_host: base_host.unwrap_or_else(|| DEFAULT_HOST.into()),
        }
    }

    /// Build a config from `MONOBANK_TOKEN` / `MONOBANK_HOST`.
    ///
    /// Empty variables are treated as unset.
    pub fn from_env() -> Result<Self> {
        let token = read_env(TOKEN_ENV)?;
        let host = read_env(HOST_ENV)?;
        Ok(Self::new(token, host))
    }

    /// Token value for the `X-Token` header.
    ///
    /// Empty when the request is unauthenticated or no token is configured.
    pub fn auth_header(&self, use_auth: bool) -> &str {
        match (&self.token, use_auth) {
            (Some(token), true) => token,
            _ => "",
        }
    }
}

fn read_env(key: &str) -> Result<Option<String>> {
    match std::env::var(key) {
        Ok(v) if v.is_empty() => Ok(None),
        Ok(v) => Ok(Some(v)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(MonoError::Config(format!("{key}: {e}"))),
    }
}
