use actix_web::{http::StatusCode, test::TestRequest};

use super::helpers::{empty_api, parse_json, send, with_admin_key, TEST_ADMIN_KEY};
use crate::data_objects::JsonResponse;

#[actix_web::test]
async fn health_check_is_ok() {
    let api = empty_api();
    let (status, body) = send(&api, TestRequest::get().uri("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "👍️\n");
}

#[actix_web::test]
async fn verify_with_the_configured_credential_succeeds() {
    let api = empty_api();
    let req = with_admin_key(TestRequest::post().uri("/api/auth/verify"), TEST_ADMIN_KEY);
    let (status, body) = send(&api, req).await;
    assert_eq!(status, StatusCode::OK);
    let response: JsonResponse = parse_json(&body);
    assert!(response.success);
}

#[actix_web::test]
async fn verify_with_a_wrong_credential_is_unauthorized() {
    let api = empty_api();
    let req = with_admin_key(TestRequest::post().uri("/api/auth/verify"), "wrong-key");
    let (status, body) = send(&api, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(!body.contains(TEST_ADMIN_KEY), "the configured credential must never be echoed");
}

#[actix_web::test]
async fn verify_without_a_credential_is_a_bad_request() {
    let api = empty_api();
    let (status, body) = send(&api, TestRequest::post().uri("/api/auth/verify")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("error"));
}
