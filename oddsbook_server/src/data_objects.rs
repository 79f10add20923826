use std::fmt::Display;

use chrono::{DateTime, Utc};
use obk_common::money::display_amount;
use oddsbook_engine::types::{Matchup, MatchupId, NewMatchup, Side, WagerQuote};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonResponse {
    pub success: bool,
    pub message: String,
}

impl JsonResponse {
    pub fn success<S: Display>(message: S) -> Self {
        Self { success: true, message: message.to_string() }
    }

    pub fn failure<S: Display>(message: S) -> Self {
        Self { success: false, message: message.to_string() }
    }
}

/// Body of `POST /api/matchups`.
///
/// The name fields default to empty strings so that a missing field reports the same
/// "must not be empty" validation error as a blank one. Multipliers are raw JSON values: the
/// engine resolves anything unusable to the documented default rather than rejecting it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMatchupParams {
    #[serde(default)]
    pub side_a: String,
    #[serde(default)]
    pub side_b: String,
    #[serde(default)]
    pub sport: String,
    #[serde(default)]
    pub multiplier_a: Option<Value>,
    #[serde(default)]
    pub multiplier_b: Option<Value>,
}

impl From<NewMatchupParams> for NewMatchup {
    fn from(params: NewMatchupParams) -> Self {
        NewMatchup::new(
            params.side_a,
            params.side_b,
            params.sport,
            params.multiplier_a.as_ref(),
            params.multiplier_b.as_ref(),
        )
    }
}

/// Body of `POST /api/matchups/{id}/quote`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteParams {
    pub side: String,
    pub stake: Decimal,
}

/// Response of `GET /api/matchups`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchupListResult {
    pub matchups: Vec<Matchup>,
    pub count: usize,
    pub timestamp: DateTime<Utc>,
}

/// Response of `POST /api/matchups/{id}/quote`: the engine's quote with the payout formatted to
/// cents. The engine computes at full precision; presentation rounding happens here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WagerQuoteResult {
    pub matchup_id: MatchupId,
    pub side: Side,
    pub stake: Decimal,
    pub multiplier: Decimal,
    pub payout: Decimal,
    pub quoted_at: DateTime<Utc>,
}

impl From<WagerQuote> for WagerQuoteResult {
    fn from(quote: WagerQuote) -> Self {
        Self {
            matchup_id: quote.matchup_id,
            side: quote.side,
            stake: quote.stake,
            multiplier: quote.multiplier,
            payout: display_amount(quote.payout),
            quoted_at: quote.quoted_at,
        }
    }
}
