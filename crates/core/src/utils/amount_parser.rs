//! Lenient number parsing for hand-authored rate-sheet cells.
//!
//! Cells look like `"₹20"`, `"15%"`, `"₹ 1,250.50"` or
//! `"₹45 per cubic foot per month"`. Parsing strips a leading currency symbol
//! and reads the leading numeric token; anything after it is unit text.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::constants::CURRENCY_SYMBOLS;

fn strip_currency(raw: &str) -> &str {
    let mut s = raw.trim();
    for symbol in CURRENCY_SYMBOLS {
        if let Some(rest) = s.strip_prefix(symbol) {
            s = rest.trim_start();
            break;
        }
    }
    s
}

fn leading_numeric_token(s: &str) -> &str {
    let end = s
        .char_indices()
        .find(|&(i, c)| {
            let sign = i == 0 && (c == '-' || c == '+');
            !(c.is_ascii_digit() || c == '.' || c == ',' || sign)
        })
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    &s[..end]
}

/// Parses a money cell. Returns `None` when no leading number is present.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let token = leading_numeric_token(strip_currency(raw));
    let cleaned: String = token.chars().filter(|c| *c != ',').collect();
    let cleaned = cleaned.trim_end_matches('.');
    if cleaned.is_empty() || cleaned == "-" || cleaned == "+" {
        return None;
    }
    Decimal::from_str(cleaned).ok()
}

/// Parses a percentage cell, with or without a trailing `%`.
pub fn parse_percentage(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    let without_symbol = trimmed.strip_suffix('%').unwrap_or(trimmed);
    parse_amount(without_symbol)
}

/// Parses an inclusive `"<min>-<max>"` price band.
pub fn parse_price_range(raw: &str) -> Option<(Decimal, Decimal)> {
    let (min, max) = raw.trim().split_once('-')?;
    Some((parse_amount(min)?, parse_amount(max)?))
}
