//! Display formatting helpers.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Render a price or profit with two decimals, as the market displays all
/// amounts.
#[must_use]
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}
