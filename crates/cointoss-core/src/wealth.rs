//! Wealth arithmetic.
//!
//! A round multiplies wealth by `1 + win_return` or `1 + lose_return`.
//! Nothing is clamped: a `lose_return` at or below `-1.0` drives wealth to
//! zero or below, which is accepted input rather than an error.

/// Apply one round's outcome to `current_wealth`.
pub fn apply_outcome(current_wealth: f64, won: bool, win_return: f64, lose_return: f64) -> f64 {
    if won {
        current_wealth * (1.0 + win_return)
    } else {
        current_wealth * (1.0 + lose_return)
    }
}

/// Expected multiplicative growth factor of one round under a fair coin.
///
/// The coin is independent of the player's call, so this holds for any
/// calling strategy.
pub fn expected_value(win_return: f64, lose_return: f64) -> f64 {
    0.5 * (1.0 + win_return) + 0.5 * (1.0 + lose_return)
}

/// Round to `places` decimal places.
///
/// Works on the exact binary value and breaks ties to even, so `0.125`
/// becomes `0.12` and `2.675` (stored just below the half) becomes `2.67`.
/// Formatting avoids the error a scale-round-unscale would introduce.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}

/// Round a wealth figure to cents.
pub fn round_cents(value: f64) -> f64 {
    round_to(value, 2)
}

/// Round a wealth history to cents.
pub fn round_history(history: &[f64]) -> Vec<f64> {
    history.iter().copied().map(round_cents).collect()
}
