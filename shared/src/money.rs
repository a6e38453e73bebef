//! Money helpers
//!
//! Amounts are exact decimals. Parsing is total: whatever a user has typed
//! into a numeric field yields a non-negative amount, falling back to zero.
//! Display rounds half away from zero at the cent boundary.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Glyph shown in a row total cell when the row does not count
pub const DEFAULT_PLACEHOLDER: &str = "\u{2014}";

/// Prefix for every formatted amount
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Parse user input into a non-negative amount.
///
/// Accepts the leading numeric part of the input (`"12abc"` is 12, `".5"` is
/// 0.5, `"1e3"` is 1000). Empty, non-numeric, negative and out-of-range input
/// is 0.
pub fn parse_amount(raw: &str) -> Decimal {
    let Some(literal) = numeric_prefix(raw.trim()) else {
        return Decimal::ZERO;
    };

    let parsed = if literal.contains('e') {
        Decimal::from_scientific(&literal)
    } else {
        Decimal::from_str(&literal)
    };
    match parsed {
        Ok(value) if value.is_sign_negative() => Decimal::ZERO,
        Ok(value) => value,
        Err(_) => Decimal::ZERO,
    }
}

/// Longest `[+-]digits[.digits][e[+-]digits]` prefix, normalised for
/// `Decimal::from_str` or `Decimal::from_scientific`
fn numeric_prefix(input: &str) -> Option<String> {
    let mut chars = input.chars().peekable();
    let mut sign = "";
    if let Some(&c) = chars.peek() {
        if c == '-' || c == '+' {
            sign = if c == '-' { "-" } else { "" };
            chars.next();
        }
    }

    let integer = take_digits(&mut chars);
    let mut fraction = String::new();
    if chars.peek() == Some(&'.') {
        chars.next();
        fraction = take_digits(&mut chars);
    }

    if integer.is_empty() && fraction.is_empty() {
        return None;
    }

    let mut literal = String::from(sign);
    literal.push_str(if integer.is_empty() { "0" } else { integer.as_str() });
    if !fraction.is_empty() {
        literal.push('.');
        literal.push_str(&fraction);
    }
    if let Some(exponent) = exponent_suffix(chars.collect::<String>().as_str()) {
        literal.push('e');
        literal.push_str(&exponent);
    }
    Some(literal)
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut digits = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        digits.push(c);
        chars.next();
    }
    digits
}

/// `[eE][+-]digits` at the start of `rest`, as `[-]digits`.
///
/// Exponents beyond three digits are clamped to 999, which no `Decimal` can
/// represent either way.
fn exponent_suffix(rest: &str) -> Option<String> {
    let rest = rest.strip_prefix(|c: char| c == 'e' || c == 'E')?;
    let (sign, rest) = match rest.strip_prefix('-') {
        Some(unsigned) => ("-", unsigned),
        None => ("", rest.strip_prefix('+').unwrap_or(rest)),
    };
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }

    let significant = digits.trim_start_matches('0');
    let exponent = match significant.len() {
        0 => "0",
        1..=3 => significant,
        _ => "999",
    };
    Some(format!("{sign}{exponent}"))
}

/// Round to cents, half away from zero
pub fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount as `<symbol><units>.<cents>`
pub fn format_currency(value: Decimal, symbol: &str) -> String {
    format!("{symbol}{:.2}", round_cents(value))
}

/// How amounts and excluded rows are rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub placeholder: String,
}

impl CurrencyFormat {
    pub fn new(symbol: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            placeholder: placeholder.into(),
        }
    }

    pub fn amount(&self, value: Decimal) -> String {
        format_currency(value, &self.symbol)
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY_SYMBOL, DEFAULT_PLACEHOLDER)
    }
}
