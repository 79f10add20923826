use actix_web::{http::StatusCode, test::TestRequest};
use oddsbook_engine::{types::Side, CatalogApi};
use rust_decimal_macros::dec;
use serde_json::json;

use super::helpers::{parse_json, seeded_api, send};
use crate::data_objects::WagerQuoteResult;

/// The seeded catalog opens with Lakers vs Celtics at 1.8 / 2.2.
async fn lakers_celtics_id(api: &CatalogApi) -> String {
    api.matchups().await[0].id.to_string()
}

#[actix_web::test]
async fn quote_on_side_a_pays_stake_times_multiplier_a() {
    let api = seeded_api().await;
    let id = lakers_celtics_id(&api).await;
    let req = TestRequest::post()
        .uri(&format!("/api/matchups/{id}/quote"))
        .set_json(json!({ "side": "A", "stake": 50 }));
    let (status, body) = send(&api, req).await;
    assert_eq!(status, StatusCode::OK);
    let quote: WagerQuoteResult = parse_json(&body);
    assert_eq!(quote.payout, dec!(90.00));
    assert_eq!(quote.multiplier, dec!(1.8));
    assert_eq!(quote.stake, dec!(50));
    assert_eq!(quote.side, Side::A);
    assert_eq!(quote.matchup_id.to_string(), id);
}

#[actix_web::test]
async fn quote_on_side_b_pays_stake_times_multiplier_b() {
    let api = seeded_api().await;
    let id = lakers_celtics_id(&api).await;
    let req = TestRequest::post()
        .uri(&format!("/api/matchups/{id}/quote"))
        .set_json(json!({ "side": "B", "stake": 50 }));
    let (status, body) = send(&api, req).await;
    assert_eq!(status, StatusCode::OK);
    let quote: WagerQuoteResult = parse_json(&body);
    assert_eq!(quote.payout, dec!(110.00));
    assert_eq!(quote.multiplier, dec!(2.2));
    assert_eq!(quote.side, Side::B);
}

#[actix_web::test]
async fn quote_accepts_a_zero_stake() {
    let api = seeded_api().await;
    let id = lakers_celtics_id(&api).await;
    let req = TestRequest::post()
        .uri(&format!("/api/matchups/{id}/quote"))
        .set_json(json!({ "side": "A", "stake": 0 }));
    let (status, body) = send(&api, req).await;
    assert_eq!(status, StatusCode::OK);
    let quote: WagerQuoteResult = parse_json(&body);
    assert_eq!(quote.payout, dec!(0));
}

#[actix_web::test]
async fn quote_accepts_a_stringly_stake() {
    let api = seeded_api().await;
    let id = lakers_celtics_id(&api).await;
    let req = TestRequest::post()
        .uri(&format!("/api/matchups/{id}/quote"))
        .set_json(json!({ "side": "A", "stake": "25.5" }));
    let (status, body) = send(&api, req).await;
    assert_eq!(status, StatusCode::OK);
    let quote: WagerQuoteResult = parse_json(&body);
    assert_eq!(quote.payout, dec!(45.90));
}

#[actix_web::test]
async fn quote_with_a_negative_stake_is_invalid() {
    let api = seeded_api().await;
    let id = lakers_celtics_id(&api).await;
    let req = TestRequest::post()
        .uri(&format!("/api/matchups/{id}/quote"))
        .set_json(json!({ "side": "A", "stake": -5 }));
    let (status, body) = send(&api, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("error"));
}

#[actix_web::test]
async fn quote_with_an_unknown_side_is_invalid() {
    let api = seeded_api().await;
    let id = lakers_celtics_id(&api).await;
    for side in ["C", "", "AB"] {
        let req = TestRequest::post()
            .uri(&format!("/api/matchups/{id}/quote"))
            .set_json(json!({ "side": side, "stake": 10 }));
        let (status, _) = send(&api, req).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "side '{side}' must be rejected");
    }
}

#[actix_web::test]
async fn quote_without_a_stake_is_invalid() {
    let api = seeded_api().await;
    let id = lakers_celtics_id(&api).await;
    let req = TestRequest::post().uri(&format!("/api/matchups/{id}/quote")).set_json(json!({ "side": "A" }));
    let (status, _) = send(&api, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn quote_on_an_unknown_matchup_is_not_found() {
    let api = seeded_api().await;
    let req = TestRequest::post()
        .uri("/api/matchups/no-such-matchup/quote")
        .set_json(json!({ "side": "A", "stake": 50 }));
    let (status, _) = send(&api, req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn quoting_does_not_mutate_the_catalog() {
    let api = seeded_api().await;
    let before = api.matchups().await;
    let id = lakers_celtics_id(&api).await;
    for _ in 0..3 {
        let req = TestRequest::post()
            .uri(&format!("/api/matchups/{id}/quote"))
            .set_json(json!({ "side": "B", "stake": 12.5 }));
        let (status, _) = send(&api, req).await;
        assert_eq!(status, StatusCode::OK);
    }
    assert_eq!(api.matchups().await, before);
}
