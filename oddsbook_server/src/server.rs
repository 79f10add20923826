use std::time::Duration;

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use log::*;
use oddsbook_engine::{demo::demo_matchups, CatalogApi, CredentialCheck, MatchupStore};

use crate::{
    config::ServerConfig,
    errors::{json_error_handler, ServerError},
    routes::{
        create_matchup,
        delete_matchup,
        health,
        list_matchups,
        matchup_by_id,
        quote_wager,
        verify_credential,
    },
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let api = build_catalog_api(&config).await;
    let srv = create_server_instance(config, api)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

/// Assemble the engine the server fronts: one store, one credential check, optionally seeded
/// with the demo catalog.
pub async fn build_catalog_api(config: &ServerConfig) -> CatalogApi {
    let store = MatchupStore::new();
    if config.seed_demo {
        for new in demo_matchups() {
            store.insert(new).await;
        }
        info!("🚀️ Seeded the catalog with {} demo matchups", store.len().await);
    }
    CatalogApi::new(store, CredentialCheck::new(config.admin_key.clone()))
}

pub fn create_server_instance(config: ServerConfig, api: CatalogApi) -> Result<Server, ServerError> {
    let srv = HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("obk::access_log"))
            .app_data(web::Data::new(api.clone()))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .service(health)
            .service(
                web::scope("/api")
                    .service(list_matchups)
                    .service(matchup_by_id)
                    .service(create_matchup)
                    .service(delete_matchup)
                    .service(quote_wager)
                    .service(verify_credential),
            )
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    info!("🚀️ Oddsbook server is listening on {}:{}", config.host, config.port);
    Ok(srv)
}
