use std::sync::Arc;

use chrono::Utc;
use log::*;
use tokio::sync::RwLock;

use crate::types::{Matchup, MatchupId, NewMatchup};

/// The sole owner of the live matchup catalog.
///
/// The collection is an insertion-ordered `Vec` behind a single `RwLock`. Every mutation,
/// including minting the new id, happens inside the write guard, so concurrent inserts cannot
/// race on identity and two concurrent removes of the same id yield exactly one success. Readers
/// take the read lock and receive cloned records, never references into the collection.
///
/// Cloning the store is cheap and shares the same catalog, the same way each actix worker gets a
/// clone of one database handle.
#[derive(Clone, Debug, Default)]
pub struct MatchupStore {
    catalog: Arc<RwLock<Vec<Matchup>>>,
}

impl MatchupStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All live matchups, in insertion order. Never fails.
    pub async fn list(&self) -> Vec<Matchup> {
        self.catalog.read().await.clone()
    }

    pub async fn fetch(&self, id: &MatchupId) -> Option<Matchup> {
        self.catalog.read().await.iter().find(|m| &m.id == id).cloned()
    }

    /// Insert a new matchup at the end of the catalog and return the stored record.
    ///
    /// Never fails: the payload's multipliers were already resolved by [`NewMatchup::new`].
    pub async fn insert(&self, new: NewMatchup) -> Matchup {
        let mut catalog = self.catalog.write().await;
        let matchup = Matchup {
            id: MatchupId::random(),
            side_a: new.side_a,
            side_b: new.side_b,
            sport: new.sport,
            multiplier_a: new.multiplier_a,
            multiplier_b: new.multiplier_b,
            created_at: Utc::now(),
        };
        catalog.push(matchup.clone());
        debug!("📒️ [{}] added to the catalog: {matchup}", matchup.id);
        matchup
    }

    /// Excise the matchup with the given id and return it, or `None` if it is not in the live set.
    pub async fn remove(&self, id: &MatchupId) -> Option<Matchup> {
        let mut catalog = self.catalog.write().await;
        let pos = catalog.iter().position(|m| &m.id == id)?;
        let removed = catalog.remove(pos);
        debug!("📒️ [{id}] removed from the catalog");
        Some(removed)
    }

    pub async fn len(&self) -> usize {
        self.catalog.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.catalog.read().await.is_empty()
    }
}
