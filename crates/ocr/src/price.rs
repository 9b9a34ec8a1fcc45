use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::Decimal;
use slipscan_core::Money;

// ── Compiled regex cache ─────────────────────────────────────────────────────

macro_rules! re {
    ($name:ident, $pat:expr) => {
        fn $name() -> &'static Regex {
            static R: OnceLock<Regex> = OnceLock::new();
            R.get_or_init(|| Regex::new($pat).expect("invalid regex"))
        }
    };
}

// 1–3 digits, optional thousands groups, then a separator and two cents digits.
re!(re_punctuated, r"\d{1,3}(?:[.,]\d{3})*(?:[.,]\d{2})");
// Same shape with the punctuation dropped, as OCR does on merged tokens.
re!(re_unpunctuated, r"\d{1,3}(?:\d{3})*(?:\d{2})");

/// Merged "name+price" tokens need more letters than this before a bare
/// digit run is read as cents.
const MERGED_TOKEN_MIN_ALPHA: usize = 2;

/// Find a price in a single token's text.
///
/// A punctuated amount (`12.34`, `1,234.56`, `1.234,56`) wins. Failing that,
/// a bare digit run whose last two digits are cents is accepted, but only
/// when the token also carries more than two ASCII letters (`Milk1234`).
pub fn extract_price(text: &str) -> Option<Money> {
    if let Some(m) = re_punctuated().find(text) {
        return parse_punctuated(m.as_str());
    }
    let m = re_unpunctuated().find(text)?;
    if count_alpha(text) > MERGED_TOKEN_MIN_ALPHA {
        return parse_cents_run(m.as_str());
    }
    None
}

pub fn has_price(text: &str) -> bool {
    extract_price(text).is_some()
}

/// Number of ASCII letters in `text`.
pub fn count_alpha(text: &str) -> usize {
    text.chars().filter(char::is_ascii_alphabetic).count()
}

// ── Amount parsing ────────────────────────────────────────────────────────────

/// The final separator is the decimal point; any earlier `.` or `,` groups
/// thousands and is dropped.
fn parse_punctuated(s: &str) -> Option<Money> {
    let split = s.rfind(['.', ','])?;
    let whole: String = s[..split].chars().filter(|c| !matches!(c, '.' | ',')).collect();
    let normalized = format!("{whole}.{}", &s[split + 1..]);
    match Decimal::from_str(&normalized) {
        Ok(dec) => Some(Money::from_decimal(dec)),
        Err(e) => {
            tracing::trace!(amount = s, error = %e, "unparsable price match");
            None
        }
    }
}

fn parse_cents_run(s: &str) -> Option<Money> {
    match Decimal::from_str(s) {
        Ok(mut dec) => {
            dec.set_scale(dec.scale() + 2).ok()?;
            Some(Money::from_decimal(dec))
        }
        Err(e) => {
            tracing::trace!(amount = s, error = %e, "unparsable digit run");
            None
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
