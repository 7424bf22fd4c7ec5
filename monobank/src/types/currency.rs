use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A currency pair quote from `/bank/currency`.
///
/// Pairs carry either buy/sell rates or only a cross rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyInfo {
    /// ISO 4217 numeric code of the base currency.
    pub currency_code_a: u16,
    /// ISO 4217 numeric code of the quote currency.
    pub currency_code_b: u16,
    /// Unix time in seconds.
    pub date: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_sell: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_buy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_cross: Option<f64>,
}

impl CurrencyInfo {
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.date, 0)
    }

    /// Best available single rate: cross rate, else the buy/sell midpoint.
    pub fn mid_rate(&self) -> Option<f64> {
        match (self.rate_cross, self.rate_buy, self.rate_sell) {
            (Some(cross), _, _) => Some(cross),
            (None, Some(buy), Some(sell)) => Some((buy + sell) * 0.5),
            (None, Some(buy), None) => Some(buy),
            (None, None, Some(sell)) => Some(sell),
            (None, None, None) => None,
        }
    }

    pub fn is_pair(&self, a: u16, b: u16) -> bool {
        self.currency_code_a == a && self.currency_code_b == b
    }
}
