//! Display formatting for amounts, probabilities, and odds.
//!
//! Non-finite values never reach the terminal as `NaN` or `inf`; they
//! render as [`UNDEFINED`].

/// Sentinel shown for values with no defined numeric rendering.
pub const UNDEFINED: &str = "-";

/// Formats a currency-like amount with 8 decimal places.
#[must_use]
pub fn amount(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.8}")
    } else {
        UNDEFINED.to_string()
    }
}

/// Formats a percentage with 6 decimal places and a `%` suffix.
#[must_use]
pub fn percent(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.6}%")
    } else {
        UNDEFINED.to_string()
    }
}

/// Formats a probability in [0, 1] as a percentage.
#[must_use]
pub fn probability_percent(probability: f64) -> String {
    percent(probability * 100.0)
}

/// Formats odds as `1 in N`, or the sentinel when absent.
#[must_use]
pub fn odds(odds: Option<f64>) -> String {
    match odds {
        Some(value) if value.is_finite() => format!("1 in {value:.2}"),
        _ => UNDEFINED.to_string(),
    }
}

/// Formats a payout-style multiple with 4 decimal places.
#[must_use]
pub fn multiple(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.4}")
    } else {
        UNDEFINED.to_string()
    }
}
