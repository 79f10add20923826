//! # Oddsbook server
//! This crate hosts the HTTP boundary of the Oddsbook wagering-information service. It is
//! responsible for:
//! * mapping requests onto the catalog engine (list/get/create/delete/quote),
//! * reading the admin credential off mutating requests and handing it to the engine,
//! * translating engine errors into HTTP statuses.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more
//! information.
//!
//! ## Routes
//! The server exposes the following routes:
//! * `GET /health`: a health check route that returns a 200 OK response.
//! * `GET /api/matchups`: the full catalog, in insertion order.
//! * `GET /api/matchups/{id}`: a single matchup.
//! * `POST /api/matchups`: create a matchup (requires the admin credential header).
//! * `DELETE /api/matchups/{id}`: delete a matchup (requires the admin credential header).
//! * `POST /api/matchups/{id}/quote`: a hypothetical payout for a stake on one side.
//! * `POST /api/auth/verify`: check the admin credential without mutating anything.

pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;
pub mod routes;
pub mod server;

#[cfg(test)]
mod endpoint_tests;
