use std::io::Write;

use chrono::DateTime;
use monobank::types::{CurrencyInfo, StatementItem, UserInfo};
use serde_json::Value;

use crate::error::CliError;

/// Pretty-print a raw API response.
pub fn write_json<W: Write>(value: &Value, writer: &mut W) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// TSV: code_a \t code_b \t buy \t sell \t cross \t date
pub fn write_rates<W: Write>(
    rates: &[CurrencyInfo],
    code: Option<u16>,
    writer: &mut W,
) -> Result<(), CliError> {
    let mut buf = String::new();
    for rate in rates {
        if let Some(code) = code {
            if rate.currency_code_a != code && rate.currency_code_b != code {
                continue;
            }
        }
        buf.clear();
        push_num(&mut buf, rate.currency_code_a);
        buf.push('\t');
        push_num(&mut buf, rate.currency_code_b);
        buf.push('\t');
        push_rate(&mut buf, rate.rate_buy);
        buf.push('\t');
        push_rate(&mut buf, rate.rate_sell);
        buf.push('\t');
        push_rate(&mut buf, rate.rate_cross);
        buf.push('\t');
        push_time(&mut buf, rate.date);
        buf.push('\n');
        writer.write_all(buf.as_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

/// Client header line, then one TSV line per account and jar.
pub fn write_user_info<W: Write>(info: &UserInfo, writer: &mut W) -> Result<(), CliError> {
    writeln!(writer, "{}\t{}", info.client_id, info.name)?;
    if !info.web_hook_url.is_empty() {
        writeln!(writer, "webhook\t{}", info.web_hook_url)?;
    }
    for account in &info.accounts {
        writeln!(
            writer,
            "account\t{}\t{}\t{}\t{}\t{}\t{}",
            account.id,
            account.kind,
            account.currency_code,
            account.balance_major(),
            account.credit_limit_major(),
            account.masked_pan.join(","),
        )?;
    }
    for jar in &info.jars {
        writeln!(
            writer,
            "jar\t{}\t{}\t{}\t{}\t{}",
            jar.id,
            jar.title,
            jar.currency_code,
            jar.balance_major(),
            jar.goal_major().map(|g| g.to_string()).unwrap_or_else(|| "-".into()),
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// TSV: time \t amount \t balance \t mcc \t description
///
/// Amounts are scaled by the minor-unit digits of `account_currency`.
pub fn write_statement<W: Write>(
    items: &[StatementItem],
    account_currency: u16,
    writer: &mut W,
) -> Result<(), CliError> {
    let mut buf = String::new();
    for item in items {
        buf.clear();
        push_time(&mut buf, item.time);
        buf.push('\t');
        buf.push_str(&item.amount_major(account_currency).to_string());
        buf.push('\t');
        buf.push_str(&item.balance_major(account_currency).to_string());
        buf.push('\t');
        push_num(&mut buf, item.mcc);
        buf.push('\t');
        buf.push_str(&item.description.replace(|c: char| c == '\t' || c == '\n', " "));
        if item.hold {
            buf.push_str("\t(hold)");
        }
        buf.push('\n');
        writer.write_all(buf.as_bytes())?;
    }
    writer.flush()?;
    Ok(())
}

/// Fast f64 formatting via `ryu`; `-` when absent.
fn push_rate(buf: &mut String, val: Option<f64>) {
    match val {
        Some(v) => {
            let mut b = ryu::Buffer::new();
            buf.push_str(b.format(v));
        }
        None => buf.push('-'),
    }
}

fn push_num(buf: &mut String, val: impl std::fmt::Display) {
    use std::fmt::Write as _;
    let _ = write!(buf, "{val}");
}

/// RFC 3339 UTC, or the raw seconds when out of range.
fn push_time(buf: &mut String, secs: i64) {
    match DateTime::from_timestamp(secs, 0) {
        Some(t) => buf.push_str(&t.to_rfc3339()),
        None => push_num(buf, secs),
    }
}
