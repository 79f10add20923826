use actix_web::{http::StatusCode, test, test::TestRequest, web, App};
use obk_common::Secret;
use oddsbook_engine::{demo::demo_matchups, CatalogApi, CredentialCheck, MatchupStore};
use serde::de::DeserializeOwned;

use crate::{
    errors::json_error_handler,
    routes::{
        create_matchup,
        delete_matchup,
        health,
        list_matchups,
        matchup_by_id,
        quote_wager,
        verify_credential,
        ADMIN_KEY_HEADER,
    },
};

// The credential every endpoint test runs with. DO NOT re-use this value anywhere.
pub const TEST_ADMIN_KEY: &str = "endpoint-test-admin-key";

pub fn empty_api() -> CatalogApi {
    let _ = env_logger::try_init().ok();
    CatalogApi::new(MatchupStore::new(), CredentialCheck::new(Secret::new(TEST_ADMIN_KEY.to_string())))
}

pub async fn seeded_api() -> CatalogApi {
    let _ = env_logger::try_init().ok();
    let store = MatchupStore::new();
    for new in demo_matchups() {
        store.insert(new).await;
    }
    CatalogApi::new(store, CredentialCheck::new(Secret::new(TEST_ADMIN_KEY.to_string())))
}

/// Run one request against a freshly assembled app (the same services and json config the real
/// server registers) and hand back the response status and body.
pub async fn send(api: &CatalogApi, req: TestRequest) -> (StatusCode, String) {
    let app = App::new()
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
        );
    let service = test::init_service(app).await;
    let res = test::call_service(&service, req.to_request()).await;
    let status = res.status();
    let body = test::read_body(res).await;
    (status, String::from_utf8_lossy(&body).into_owned())
}

pub fn parse_json<T: DeserializeOwned>(body: &str) -> T {
    serde_json::from_str(body).unwrap_or_else(|e| panic!("Could not parse response body. {e}\n{body}"))
}

pub fn with_admin_key(req: TestRequest, key: &str) -> TestRequest {
    req.insert_header((ADMIN_KEY_HEADER, key))
}
