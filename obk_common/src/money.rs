//! Decimal conventions shared by the engine and the server.
//!
//! All stakes, multipliers and payouts are [`rust_decimal::Decimal`] values. Multipliers are
//! normalised through [`multiplier_or_default`] in exactly one place, so there is a single,
//! documented answer to "what happens to a bad multiplier" rather than a mix of defaulting and
//! rejection depending on the code path.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

/// Multiplier applied when a matchup is created without one, or with one we cannot parse.
pub const DEFAULT_MULTIPLIER: Decimal = dec!(1.5);

/// Multipliers below even money make no sense in the catalog and are treated as invalid input.
pub const MIN_MULTIPLIER: Decimal = dec!(1.0);

/// Resolve a raw multiplier from a request body into an in-domain value.
///
/// Accepts a JSON number or a numeric string. Anything missing, unparseable, or below
/// [`MIN_MULTIPLIER`] resolves to [`DEFAULT_MULTIPLIER`]. Numbers are parsed via their decimal
/// rendering rather than through `f64`, so `1.8` stays exactly `1.8`.
pub fn multiplier_or_default(raw: Option<&Value>) -> Decimal {
    let parsed = match raw {
        Some(Value::Number(n)) => n.to_string().parse::<Decimal>().ok(),
        Some(Value::String(s)) => s.trim().parse::<Decimal>().ok(),
        _ => None,
    };
    match parsed {
        Some(m) if m >= MIN_MULTIPLIER => m,
        _ => DEFAULT_MULTIPLIER,
    }
}

/// Round a payout for presentation. The engine itself works at full precision; only the boundary
/// formats amounts to cents.
pub fn display_amount(amount: Decimal) -> Decimal {
    let mut cents = amount.round_dp(2);
    cents.rescale(2);
    cents
}
