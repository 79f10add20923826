use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, Utc};
use obk_common::money::multiplier_or_default;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

//--------------------------------------     MatchupId       ---------------------------------------------------------

/// An opaque identifier for a matchup.
///
/// Minted exactly once, at insertion, and never recycled: ids are random v4 UUIDs, so a deleted
/// matchup's id can never resolve to a different record later.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchupId(pub String);

impl MatchupId {
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for MatchupId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<S: Into<String>> From<S> for MatchupId {
    fn from(value: S) -> Self {
        Self(value.into())
    }
}

//--------------------------------------        Side         ---------------------------------------------------------

/// One of the two competing parties in a matchup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

#[derive(Debug, Clone, Error)]
#[error("A side must be 'A' or 'B'. Received '{0}'")]
pub struct InvalidSide(String);

impl FromStr for Side {
    type Err = InvalidSide;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(Side::A),
            "B" | "b" => Ok(Side::B),
            other => Err(InvalidSide(other.to_string())),
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

//--------------------------------------      Matchup        ---------------------------------------------------------

/// A tracked pairing of two competing sides with their payout multipliers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    pub id: MatchupId,
    pub side_a: String,
    pub side_b: String,
    pub sport: String,
    pub multiplier_a: Decimal,
    pub multiplier_b: Decimal,
    pub created_at: DateTime<Utc>,
}

impl Matchup {
    pub fn multiplier_for(&self, side: Side) -> Decimal {
        match side {
            Side::A => self.multiplier_a,
            Side::B => self.multiplier_b,
        }
    }
}

impl Display for Matchup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} vs {} ({})", self.side_a, self.side_b, self.sport)
    }
}

//--------------------------------------     NewMatchup      ---------------------------------------------------------

/// The payload for a catalog insertion.
///
/// Multipliers are resolved in the constructor, so a `NewMatchup` always holds in-domain values
/// and an insert can never fail on numeric input. Anything the caller sends that does not parse
/// as a multiplier of at least 1.0 resolves to the documented default of 1.5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMatchup {
    pub side_a: String,
    pub side_b: String,
    pub sport: String,
    pub multiplier_a: Decimal,
    pub multiplier_b: Decimal,
}

impl NewMatchup {
    pub fn new<SA, SB, SP>(
        side_a: SA,
        side_b: SB,
        sport: SP,
        multiplier_a: Option<&Value>,
        multiplier_b: Option<&Value>,
    ) -> Self
    where
        SA: Into<String>,
        SB: Into<String>,
        SP: Into<String>,
    {
        Self {
            side_a: side_a.into(),
            side_b: side_b.into(),
            sport: sport.into(),
            multiplier_a: multiplier_or_default(multiplier_a),
            multiplier_b: multiplier_or_default(multiplier_b),
        }
    }

    /// Build a payload from multipliers that are already known to be in-domain.
    pub fn with_multipliers<SA, SB, SP>(
        side_a: SA,
        side_b: SB,
        sport: SP,
        multiplier_a: Decimal,
        multiplier_b: Decimal,
    ) -> Self
    where
        SA: Into<String>,
        SB: Into<String>,
        SP: Into<String>,
    {
        Self {
            side_a: side_a.into(),
            side_b: side_b.into(),
            sport: sport.into(),
            multiplier_a,
            multiplier_b,
        }
    }
}

//--------------------------------------     WagerQuote      ---------------------------------------------------------

/// An ephemeral payout quote. Computed per request, echoed to the caller, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WagerQuote {
    pub matchup_id: MatchupId,
    pub side: Side,
    pub stake: Decimal,
    pub multiplier: Decimal,
    pub payout: Decimal,
    pub quoted_at: DateTime<Utc>,
}
