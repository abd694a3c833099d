//! Expense ("Spesen") parsing and formatting.

use regex::Regex;
use std::sync::LazyLock;

static DECIMAL_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").expect("valid decimal regex")
});

/// Parse an expense amount typed with a comma or a dot as decimal separator.
///
/// Only the first comma is turned into a dot, then the longest leading
/// decimal number is taken (`"7.5 EUR"` → 7.5). Text without a leading
/// number gives `None` and contributes nothing to the total.
pub fn parse_expense(text: &str) -> Option<f64> {
    let normalized = text.trim_start().replacen(',', ".", 1);
    let m = DECIMAL_PREFIX.find(&normalized)?;
    m.as_str().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// `20.0` → `"20,00 €"`.
pub fn format_expense(amount: f64, currency: &str) -> String {
    let text = format!("{:.2}", amount).replace('.', ",");
    if currency.is_empty() {
        text
    } else {
        format!("{text} {currency}")
    }
}
