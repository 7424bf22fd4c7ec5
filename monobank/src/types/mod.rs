pub mod currency;
pub mod statement;
pub mod user;
pub mod webhook;

pub use currency::*;
pub use statement::*;
pub use user::*;
pub use webhook::*;

use rust_decimal::Decimal;

/// ISO 4217 minor-unit digits for a numeric currency code.
///
/// Codes not listed here use two digits.
pub fn minor_unit_digits(currency_code: u16) -> u32 {
    match currency_code {
        // BIF, CLP, DJF, GNF, ISK, JPY, KMF, KRW, PYG, RWF, UGX, UYI, VND, VUV, XAF, XOF, XPF
        108 | 152 | 262 | 324 | 352 | 392 | 174 | 410 | 600 | 646 | 800 | 940 | 704 | 548
        | 950 | 952 | 953 => 0,
        // BHD, IQD, JOD, KWD, LYD, OMR, TND
        48 | 368 | 400 | 414 | 434 | 512 | 788 => 3,
        _ => 2,
    }
}

/// Convert an amount in minor units of `currency_code` to major units.
pub fn to_major_units(minor: i64, currency_code: u16) -> Decimal {
    Decimal::new(minor, minor_unit_digits(currency_code))
}
