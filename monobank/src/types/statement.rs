use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::to_major_units;

/// A single transaction from `/personal/statement`.
///
/// All amounts are in minor currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementItem {
    pub id: String,
    /// Unix time in seconds.
    pub time: i64,
    pub description: String,
    /// Merchant Category Code (ISO 18245).
    pub mcc: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_mcc: Option<u32>,
    /// Authorization hold status.
    pub hold: bool,
    /// Amount in the account currency.
    pub amount: i64,
    /// Amount in the transaction currency.
    pub operation_amount: i64,
    pub currency_code: u16,
    pub commission_rate: i64,
    pub cashback_amount: i64,
    /// Account balance after the transaction.
    pub balance: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Receipt id for check.gov.ua.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counter_edrpou: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counter_iban: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counter_name: Option<String>,
}

impl StatementItem {
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.time, 0)
    }

    /// `amount` in major units of the account currency.
    pub fn amount_major(&self, account_currency: u16) -> Decimal {
        to_major_units(self.amount, account_currency)
    }

    /// `balance` in major units of the account currency.
    pub fn balance_major(&self, account_currency: u16) -> Decimal {
        to_major_units(self.balance, account_currency)
    }

    /// `operation_amount` in major units of the transaction currency.
    pub fn operation_amount_major(&self) -> Decimal {
        to_major_units(self.operation_amount, self.currency_code)
    }

    pub fn is_debit(&self) -> bool {
        self.amount < 0
    }
}

/// A `from`/`to` path segment of the statement endpoint.
///
/// Numbers are rendered as decimal integers, strings verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementBound {
    Seconds(i64),
    Raw(String),
}

impl StatementBound {
    /// Empty segment; the server treats it as "now".
    pub fn empty() -> Self {
        StatementBound::Raw(String::new())
    }
}

impl fmt::Display for StatementBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatementBound::Seconds(s) => write!(f, "{s}"),
            StatementBound::Raw(s) => f.write_str(s),
        }
    }
}

impl From<i64> for StatementBound {
    fn from(s: i64) -> Self {
        StatementBound::Seconds(s)
    }
}

impl From<&str> for StatementBound {
    fn from(s: &str) -> Self {
        StatementBound::Raw(s.to_string())
    }
}

impl From<String> for StatementBound {
    fn from(s: String) -> Self {
        StatementBound::Raw(s)
    }
}

impl From<DateTime<Utc>> for StatementBound {
    fn from(t: DateTime<Utc>) -> Self {
        StatementBound::Seconds(t.timestamp())
    }
}
