use std::fmt;
use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, info};
use url::Url;

use crate::cache::{CacheSlot, Clock, SystemClock};
use crate::config::MonoConfig;
use crate::error::{MonoError, Result};
use crate::rest::endpoints;
use crate::rest::{ApiRequest, ApiResponse, Executor, MonoHttpClient};
use crate::types::*;

/// Main Monobank client.
///
/// Currency, client-info and statement responses are memoized per endpoint
/// family. Each family's check, fetch and store run under that family's lock,
/// so concurrent callers of one family share a single request while different
/// families proceed independently.
pub struct Monobank {
    config: MonoConfig,
    executor: Arc<dyn Executor>,
    clock: Arc<dyn Clock>,
    currency: Mutex<CacheSlot>,
    client_info: Mutex<CacheSlot>,
    statement: Mutex<CacheSlot>,
}

impl fmt::Debug for Monobank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Monobank")
            .field("base_host", &self.config.base_host)
            .field("has_token", &self.config.token.is_some())
            .finish_non_exhaustive()
    }
}

impl Monobank {
    /// Create a client backed by reqwest and the system clock.
    pub fn new(config: MonoConfig) -> Self {
        Self::with_executor(config, Arc::new(MonoHttpClient::new()), Arc::new(SystemClock))
    }

    /// Create a client with a custom executor and clock.
    pub fn with_executor(
        config: MonoConfig,
        executor: Arc<dyn Executor>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config,
            executor,
            clock,
            currency: Mutex::new(CacheSlot::new()),
            client_info: Mutex::new(CacheSlot::new()),
            statement: Mutex::new(CacheSlot::new()),
        }
    }

    pub fn config(&self) -> &MonoConfig {
        &self.config
    }

    pub fn has_token(&self) -> bool {
        self.config.token.is_some()
    }

    /// Issue a raw request against `https://{host}{path}`.
    ///
    /// `X-Token` is always sent; it carries the configured token only when
    /// `use_auth` is set. Transport errors are returned unchanged and the
    /// status code is not interpreted.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        use_auth: bool,
        body: Option<Value>,
    ) -> Result<ApiResponse> {
        let url = self.url(&endpoints::segments(path))?;
        self.send(method, url, use_auth, body).await
    }

    async fn send(
        &self,
        method: Method,
        url: String,
        use_auth: bool,
        body: Option<Value>,
    ) -> Result<ApiResponse> {
        let request = ApiRequest {
            method,
            url,
            token: self.config.auth_header(use_auth).to_string(),
            json: body,
        };
        self.executor.execute(request).await
    }

    /// Join `segments` onto `https://{host}`, percent-encoding each one so it
    /// stays a single path segment. `.` and `..` cannot be expressed and are
    /// rejected.
    fn url(&self, segments: &[String]) -> Result<String> {
        if let Some(bad) = segments.iter().find(|s| matches!(s.as_str(), "." | "..")) {
            return Err(MonoError::PathSegment(bad.clone()));
        }
        let mut url = Url::parse(&format!("https://{}", self.config.base_host))?;
        url.path_segments_mut()
            .map_err(|()| MonoError::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(segments);
        Ok(url.into())
    }

    /// Serve `slot` or refresh it with a GET to `segments`.
    ///
    /// A failed refresh keeps the previous value and the new stamp.
    async fn cached(
        &self,
        slot: &Mutex<CacheSlot>,
        ttl: u64,
        force: bool,
        segments: &[String],
        use_auth: bool,
    ) -> Result<Value> {
        let url = self.url(segments)?;
        let mut slot = slot.lock().await;
        if slot.should_refresh(ttl, force, self.clock.now()) {
            debug!(url = %url, force, "refreshing");
            let resp = self.send(Method::GET, url, use_auth, None).await?;
            slot.store(resp.json()?);
        } else {
            debug!(url = %url, last_fetch = slot.last_fetch, "cache hit");
        }
        Ok(slot.current())
    }

    // --- Public ---

    /// GET /bank/currency - Exchange rates, cached for 6 minutes.
    pub async fn currency(&self, force: bool) -> Result<Value> {
        self.cached(
            &self.currency,
            endpoints::CURRENCY_TTL,
            force,
            &endpoints::segments(endpoints::CURRENCY),
            false,
        )
        .await
    }

    /// Typed view of [`Monobank::currency`].
    pub async fn currency_rates(&self, force: bool) -> Result<Vec<CurrencyInfo>> {
        Ok(serde_json::from_value(self.currency(force).await?)?)
    }

    // --- Personal ---

    /// GET /personal/client-info - Client profile, cached for 60 seconds.
    pub async fn client_info(&self, force: bool) -> Result<Value> {
        self.cached(
            &self.client_info,
            endpoints::CLIENT_INFO_TTL,
            force,
            &endpoints::segments(endpoints::CLIENT_INFO),
            true,
        )
        .await
    }

    /// Typed view of [`Monobank::client_info`].
    pub async fn user_info(&self, force: bool) -> Result<UserInfo> {
        Ok(serde_json::from_value(self.client_info(force).await?)?)
    }

    /// Register a webhook URL. Never cached.
    ///
    /// Sent as a GET with a JSON body, which is what the API accepts.
    /// Returns `true` only for HTTP 200; other statuses are not errors.
    pub async fn set_webhook(&self, url: &str) -> Result<bool> {
        let body = serde_json::to_value(WebhookRequest::new(url))?;
        let resp = self
            .request(Method::GET, endpoints::WEBHOOK, true, Some(body))
            .await?;
        let ok = resp.is_ok();
        info!(status = resp.status, ok, "webhook registration");
        Ok(ok)
    }

    /// GET /personal/statement/{account}/{from}/{to} - Transactions, cached for 60 seconds.
    ///
    /// `from` defaults to 30 days ago and `to` to an empty segment. All
    /// accounts and ranges share one cache slot.
    pub async fn statement(
        &self,
        account: &str,
        from: Option<StatementBound>,
        to: Option<StatementBound>,
        force: bool,
    ) -> Result<Value> {
        let from = from.unwrap_or_else(|| self.default_from());
        let to = to.unwrap_or_else(StatementBound::empty);
        let segments = endpoints::statement(account, &from, &to);
        self.cached(&self.statement, endpoints::STATEMENT_TTL, force, &segments, true)
            .await
    }

    /// Typed view of [`Monobank::statement`].
    pub async fn statement_items(
        &self,
        account: &str,
        from: Option<StatementBound>,
        to: Option<StatementBound>,
        force: bool,
    ) -> Result<Vec<StatementItem>> {
        Ok(serde_json::from_value(
            self.statement(account, from, to, force).await?,
        )?)
    }

    fn default_from(&self) -> StatementBound {
        let now = i64::try_from(self.clock.now()).unwrap_or(i64::MAX);
        StatementBound::Seconds(now - endpoints::STATEMENT_WINDOW)
    }
}
