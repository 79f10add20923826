use thiserror::Error;

use crate::{odds::OddsError, types::MatchupId};

#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("The admin credential was missing or did not match")]
    Unauthorized,
    #[error("No matchup with id [{0}] exists in the catalog")]
    MatchupNotFound(MatchupId),
    #[error("Invalid input: {0}")]
    ValidationError(String),
}

impl From<OddsError> for CatalogError {
    fn from(err: OddsError) -> Self {
        Self::ValidationError(err.to_string())
    }
}
