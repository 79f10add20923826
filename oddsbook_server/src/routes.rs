//! Request handler definitions
//!
//! Define each route and its handler here. Handlers stay thin: read the request, hand it to the
//! [`CatalogApi`], translate the result. Anything longer than a few lines belongs in the engine.
//!
//! Handlers are async so that a slow client or a congested worker never blocks the others; the
//! catalog lock is only ever held inside the engine, never across an await point in a handler.

use actix_web::{delete, get, post, web, HttpRequest, HttpResponse, Responder};
use chrono::Utc;
use log::*;
use oddsbook_engine::{types::MatchupId, CatalogApi, CatalogError};

use crate::{
    data_objects::{JsonResponse, MatchupListResult, NewMatchupParams, QuoteParams, WagerQuoteResult},
    errors::ServerError,
};

/// The request header carrying the shared admin credential.
pub const ADMIN_KEY_HEADER: &str = "obk_admin_key";

/// The one place a credential is read out of a request. Every credentialled route goes through
/// here rather than re-implementing header handling.
fn presented_credential(req: &HttpRequest) -> Option<&str> {
    req.headers().get(ADMIN_KEY_HEADER).and_then(|v| v.to_str().ok())
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

// ----------------------------------------------  Matchups ----------------------------------------------------

#[get("/matchups")]
pub async fn list_matchups(api: web::Data<CatalogApi>) -> HttpResponse {
    trace!("💻️ GET all matchups");
    let matchups = api.matchups().await;
    let result = MatchupListResult { count: matchups.len(), matchups, timestamp: Utc::now() };
    HttpResponse::Ok().json(result)
}

#[get("/matchups/{id}")]
pub async fn matchup_by_id(
    path: web::Path<String>,
    api: web::Data<CatalogApi>,
) -> Result<HttpResponse, ServerError> {
    let id = MatchupId::from(path.into_inner());
    debug!("💻️ GET matchup [{id}]");
    let matchup = api.matchup(&id).await?;
    Ok(HttpResponse::Ok().json(matchup))
}

#[post("/matchups")]
pub async fn create_matchup(
    req: HttpRequest,
    body: web::Json<NewMatchupParams>,
    api: web::Data<CatalogApi>,
) -> Result<HttpResponse, ServerError> {
    debug!("💻️ POST new matchup");
    let matchup = api.create_matchup(presented_credential(&req), body.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(matchup))
}

#[delete("/matchups/{id}")]
pub async fn delete_matchup(
    req: HttpRequest,
    path: web::Path<String>,
    api: web::Data<CatalogApi>,
) -> Result<HttpResponse, ServerError> {
    let id = MatchupId::from(path.into_inner());
    debug!("💻️ DELETE matchup [{id}]");
    let removed = api.delete_matchup(presented_credential(&req), &id).await?;
    Ok(HttpResponse::Ok().json(removed))
}

// ----------------------------------------------   Quotes  ----------------------------------------------------

#[post("/matchups/{id}/quote")]
pub async fn quote_wager(
    path: web::Path<String>,
    body: web::Json<QuoteParams>,
    api: web::Data<CatalogApi>,
) -> Result<HttpResponse, ServerError> {
    let id = MatchupId::from(path.into_inner());
    let params = body.into_inner();
    debug!("💻️ Quote request for [{id}]: {} on side '{}'", params.stake, params.side);
    let quote = api.quote_wager(&id, &params.side, params.stake).await?;
    Ok(HttpResponse::Ok().json(WagerQuoteResult::from(quote)))
}

// ----------------------------------------------    Auth   ----------------------------------------------------

/// Check the admin credential without touching the catalog. A missing header is a malformed
/// request (400); a mismatched credential is 401, same as it would be on a mutation.
#[post("/auth/verify")]
pub async fn verify_credential(
    req: HttpRequest,
    api: web::Data<CatalogApi>,
) -> Result<HttpResponse, ServerError> {
    trace!("💻️ Credential verification request");
    let presented = presented_credential(&req).ok_or(ServerError::MissingCredential)?;
    if api.verify_credential(Some(presented)) {
        Ok(HttpResponse::Ok().json(JsonResponse::success("Credential verified")))
    } else {
        debug!("💻️ Credential verification failed");
        Err(CatalogError::Unauthorized.into())
    }
}
