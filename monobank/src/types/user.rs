use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::to_major_units;

/// Client profile from `/personal/client-info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub client_id: String,
    pub name: String,
    /// Current notification URL; empty when none is registered.
    #[serde(default)]
    pub web_hook_url: String,
    /// Granted token permissions (one letter per scope).
    #[serde(default)]
    pub permissions: Option<String>,
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub jars: Vec<Jar>,
}

impl UserInfo {
    pub fn find_account(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    pub fn find_jar(&self, id: &str) -> Option<&Jar> {
        self.jars.iter().find(|j| j.id == id)
    }
}

/// A card or FOP account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    #[serde(default)]
    pub send_id: String,
    /// Balance in minor units.
    pub balance: i64,
    pub credit_limit: i64,
    #[serde(default)]
    pub masked_pan: Vec<String>,
    /// Card type (`black`, `white`, `platinum`, `iron`, `fop`, `yellow`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    pub currency_code: u16,
    /// `None`, `UAH` or `Miles`.
    #[serde(default)]
    pub cashback_type: Option<String>,
    #[serde(default)]
    pub iban: Option<String>,
}

impl Account {
    /// Own funds, excluding the credit limit.
    pub fn own_balance(&self) -> i64 {
        self.balance.saturating_sub(self.credit_limit)
    }

    pub fn balance_major(&self) -> Decimal {
        to_major_units(self.balance, self.currency_code)
    }

    pub fn credit_limit_major(&self) -> Decimal {
        to_major_units(self.credit_limit, self.currency_code)
    }
}

/// A savings jar ("banka").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Jar {
    pub id: String,
    #[serde(default)]
    pub send_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub currency_code: u16,
    pub balance: i64,
    #[serde(default)]
    pub goal: Option<i64>,
}

impl Jar {
    pub fn balance_major(&self) -> Decimal {
        to_major_units(self.balance, self.currency_code)
    }

    pub fn goal_major(&self) -> Option<Decimal> {
        self.goal.map(|g| to_major_units(g, self.currency_code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn account(balance: i64, credit_limit: i64, currency_code: u16) -> Account {
        Account {
            id: "a".into(),
            send_id: String::new(),
            balance,
            credit_limit,
            masked_pan: Vec::new(),
            kind: "black".into(),
            currency_code,
            cashback_type: None,
            iban: None,
        }
    }

    #[test]
    fn test_own_balance() {
        assert_eq!(account(15_000, 10_000, 980).own_balance(), 5_000);
        assert_eq!(account(0, 10_000, 980).own_balance(), -10_000);
    }

    #[test]
    fn test_own_balance_saturates() {
        assert_eq!(account(i64::MIN, 1, 980).own_balance(), i64::MIN);
        assert_eq!(account(i64::MAX, -1, 980).own_balance(), i64::MAX);
    }

    #[test]
    fn test_major_units_follow_account_currency() {
        assert_eq!(account(12_345, 100, 980).balance_major(), dec!(123.45));
        assert_eq!(account(12_345, 100, 980).credit_limit_major(), dec!(1.00));
        assert_eq!(account(500, 0, 392).balance_major(), dec!(500));
    }
}
