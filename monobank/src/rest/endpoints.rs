//! Endpoint paths and per-family cache lifetimes.

use crate::types::StatementBound;

/// GET /bank/currency - Public exchange rates.
pub const CURRENCY: &str = "/bank/currency";

/// GET /personal/client-info - Client, accounts and jars.
pub const CLIENT_INFO: &str = "/personal/client-info";

/// GET /personal/webhook - Register a notification URL (JSON body).
pub const WEBHOOK: &str = "/personal/webhook";

/// Exchange rates are refreshed at most every 6 minutes.
pub const CURRENCY_TTL: u64 = 360;

pub const CLIENT_INFO_TTL: u64 = 60;

pub const STATEMENT_TTL: u64 = 60;

/// Default statement window: 30 days.
pub const STATEMENT_WINDOW: i64 = 2_592_000;

/// Split a `/`-separated path into raw segments.
pub fn segments(path: &str) -> Vec<String> {
    path.trim_start_matches('/')
        .split('/')
        .map(String::from)
        .collect()
}

/// GET /personal/statement/{account}/{from}/{to}
///
/// Each argument is kept as one raw segment; encoding happens when the URL is built.
pub fn statement(account: &str, from: &StatementBound, to: &StatementBound) -> Vec<String> {
    vec![
        "personal".into(),
        "statement".into(),
        account.into(),
        from.to_string(),
        to.to_string(),
    ]
}
