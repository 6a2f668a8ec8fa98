use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Extracts the lowest comparable USD price from free-form price text.
///
/// Dollar-marked amounts (`$12.50`, `US $1.50-2.80`) are taken at face
/// value; bare numbers are assumed to be CNY and converted with the
/// configured rate. Extraction never fails, it only returns `None`.
pub struct PriceExtractor {
    usd_regex: Regex,
    number_regex: Regex,
    conversion_rate: Decimal,
}

impl PriceExtractor {
    pub fn new() -> Self {
        // Rough CNY → USD conversion, overridable via configuration
        Self::with_rate(Decimal::new(14, 2))
    }

    pub fn with_rate(conversion_rate: Decimal) -> Self {
        PriceExtractor {
            usd_regex: Regex::new(r"\$\s*([\d.]+)").unwrap(),
            number_regex: Regex::new(r"[\d.]+").unwrap(),
            conversion_rate,
        }
    }

    /// Extract a normalized USD price from `raw`.
    ///
    /// Range strings resolve to their first (lowest) amount. Text with no
    /// numeric component yields `None`.
    pub fn extract(&self, raw: &str) -> Option<Decimal> {
        if raw.trim().is_empty() {
            return None;
        }

        // Thousands separators would split the number match
        let cleaned = raw.replace(',', "");

        if let Some(amount) = self
            .usd_regex
            .captures(&cleaned)
            .and_then(|captures| captures.get(1))
            .and_then(|m| parse_decimal(m.as_str()))
        {
            return Some(amount);
        }

        self.number_regex
            .find(&cleaned)
            .and_then(|m| parse_decimal(m.as_str()))
            .map(|amount| amount * self.conversion_rate)
    }
}

impl Default for PriceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Lenient decimal parse for regex captures like `.99` or `12.`.
fn parse_decimal(s: &str) -> Option<Decimal> {
    let trimmed = s.trim_end_matches('.');
    if trimmed.is_empty() {
        return None;
    }
    if let Some(fraction) = trimmed.strip_prefix('.') {
        Decimal::from_str(&format!("0.{}", fraction)).ok()
    } else {
        Decimal::from_str(trimmed).ok()
    }
}
