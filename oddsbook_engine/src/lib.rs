//! Oddsbook Engine
//!
//! Core logic for the Oddsbook wagering-information service. The engine is transport-agnostic:
//! it owns the matchup catalog and the payout arithmetic, and knows nothing about HTTP.
//!
//! The library is divided into three main sections:
//! 1. The matchup catalog ([`mod@catalog`]). The [`MatchupStore`] is the sole owner of the live
//!    collection of matchups; the [`CatalogApi`] wraps it together with the credential check and
//!    enforces the request order every boundary operation follows: authorization (for mutations),
//!    then validation, then execution.
//! 2. The odds engine ([`mod@odds`]). A pure stake → payout computation at full precision.
//!    Rounding for presentation is the caller's job.
//! 3. The credential check ([`mod@credential`]). One comparison against the shared admin secret,
//!    invoked uniformly by every mutating operation rather than re-implemented per endpoint.

pub mod catalog;
pub mod credential;
pub mod demo;
pub mod odds;
pub mod types;

pub use catalog::{api::CatalogApi, errors::CatalogError, store::MatchupStore};
pub use credential::CredentialCheck;
pub use odds::OddsError;
