//! The odds engine: stake → payout.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::{Matchup, Side};

#[derive(Debug, Clone, Error)]
pub enum OddsError {
    #[error("Stake must be a non-negative amount. Received {0}")]
    NegativeStake(Decimal),
}

/// Compute the payout for `stake` placed on `side` of `matchup`.
///
/// `payout = stake × multiplier-of-side`, at full precision. Rounding to cents is a presentation
/// concern and happens at the boundary, not here. Decimals cannot encode NaN or infinity, so the
/// only out-of-domain stake left to reject is a negative one.
pub fn payout(matchup: &Matchup, side: Side, stake: Decimal) -> Result<Decimal, OddsError> {
    if stake < Decimal::ZERO {
        return Err(OddsError::NegativeStake(stake));
    }
    Ok(stake * matchup.multiplier_for(side))
}
