use chrono::Utc;
use log::*;
use rust_decimal::Decimal;

use crate::{
    catalog::{errors::CatalogError, store::MatchupStore},
    credential::CredentialCheck,
    odds,
    types::{Matchup, MatchupId, NewMatchup, Side, WagerQuote},
};

/// The public face of the catalog.
///
/// Every boundary operation flows through here, in the same order per request:
/// credential check first (for mutations), then input validation, then the store or the odds
/// engine. Failures come back as typed [`CatalogError`]s; nothing is retried.
#[derive(Clone, Debug)]
pub struct CatalogApi {
    store: MatchupStore,
    credential: CredentialCheck,
}

impl CatalogApi {
    pub fn new(store: MatchupStore, credential: CredentialCheck) -> Self {
        Self { store, credential }
    }

    /// Check a presented credential without touching the catalog.
    pub fn verify_credential(&self, presented: Option<&str>) -> bool {
        self.credential.verify(presented)
    }

    /// All live matchups in insertion order. Always succeeds.
    pub async fn matchups(&self) -> Vec<Matchup> {
        self.store.list().await
    }

    pub async fn matchup_count(&self) -> usize {
        self.store.len().await
    }

    pub async fn matchup(&self, id: &MatchupId) -> Result<Matchup, CatalogError> {
        self.store.fetch(id).await.ok_or_else(|| CatalogError::MatchupNotFound(id.clone()))
    }

    /// Create a new matchup. Not idempotent: every successful call mints a fresh id.
    pub async fn create_matchup(
        &self,
        presented: Option<&str>,
        new: NewMatchup,
    ) -> Result<Matchup, CatalogError> {
        if !self.credential.verify(presented) {
            debug!("📒️ Matchup creation rejected. Admin credential missing or mismatched");
            return Err(CatalogError::Unauthorized);
        }
        validate_names(&new)?;
        let matchup = self.store.insert(new).await;
        info!("📒️ Created matchup [{}]: {matchup}", matchup.id);
        Ok(matchup)
    }

    /// Delete a matchup and return the removed record.
    pub async fn delete_matchup(
        &self,
        presented: Option<&str>,
        id: &MatchupId,
    ) -> Result<Matchup, CatalogError> {
        if !self.credential.verify(presented) {
            debug!("📒️ Matchup deletion rejected. Admin credential missing or mismatched");
            return Err(CatalogError::Unauthorized);
        }
        let removed = self.store.remove(id).await.ok_or_else(|| CatalogError::MatchupNotFound(id.clone()))?;
        info!("📒️ Deleted matchup [{}]: {removed}", removed.id);
        Ok(removed)
    }

    /// Quote a hypothetical wager. The quote is computed per request and never stored.
    pub async fn quote_wager(
        &self,
        id: &MatchupId,
        side: &str,
        stake: Decimal,
    ) -> Result<WagerQuote, CatalogError> {
        let matchup = self.matchup(id).await?;
        let side = side.parse::<Side>().map_err(|e| CatalogError::ValidationError(e.to_string()))?;
        let payout = odds::payout(&matchup, side, stake)?;
        trace!("📒️ Quoted {stake} on side {side} of [{id}]. Payout {payout}");
        Ok(WagerQuote {
            matchup_id: matchup.id.clone(),
            side,
            stake,
            multiplier: matchup.multiplier_for(side),
            payout,
            quoted_at: Utc::now(),
        })
    }
}

fn validate_names(new: &NewMatchup) -> Result<(), CatalogError> {
    for (field, value) in [("side_a", &new.side_a), ("side_b", &new.side_b), ("sport", &new.sport)] {
        if value.trim().is_empty() {
            return Err(CatalogError::ValidationError(format!("{field} must not be empty")));
        }
    }
    Ok(())
}
