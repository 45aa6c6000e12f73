//! End-to-end tests for the person API, run against the full router with
//! an in-memory store.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use contacts_server::db::{InMemoryPersonStore, PersonStore};
use contacts_server::routes;
use contacts_server::state::AppState;

fn app() -> (Router, Arc<InMemoryPersonStore>) {
    let store = Arc::new(InMemoryPersonStore::new());
    let router = routes::app(AppState::new(store.clone()));
    (router, store)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::http::Response<axum::body::Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn martine_body() -> Value {
    json!({
        "name": "martine",
        "hobby": "programming",
        "address": "pangyo",
        "job": "programmer",
        "birthday": "1991-08-15",
        "phoneNumber": "010-1111-2222"
    })
}

#[tokio::test]
async fn health_returns_ok() {
    let (router, _store) = app();

    let response = router.oneshot(empty_request("GET", "/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn readiness_returns_ok_with_reachable_store() {
    let (router, _store) = app();

    let response = router
        .oneshot(empty_request("GET", "/health/ready"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn create_then_get_returns_stored_fields() {
    let (router, _store) = app();

    let response = router
        .clone()
        .oneshot(json_request("POST", "/api/person", martine_body()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = router
        .oneshot(empty_request("GET", "/api/person/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "martine");
    assert_eq!(json["hobby"], "programming");
    assert_eq!(json["address"], "pangyo");
    assert_eq!(json["job"], "programmer");
    assert_eq!(json["birthday"], "1991-08-15");
    assert_eq!(json["phoneNumber"], "010-1111-2222");
    assert_eq!(json["deleted"], false);
    assert!(json["age"].is_number());
    assert!(json["birthdayToday"].is_boolean());
}

#[tokio::test]
async fn create_without_name_is_a_generic_server_error() {
    let (router, store) = app();

    let response = router
        .oneshot(json_request("POST", "/api/person", json!({"age": 20})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], 500);
    assert_eq!(json["message"], "알 수 없는 서버 오류가 발생하였습니다.");

    // Nothing was stored
    assert!(store.find_all_including_deleted().await.unwrap().is_empty());
}

#[tokio::test]
async fn get_missing_person_is_not_found() {
    let (router, _store) = app();

    let response = router
        .oneshot(empty_request("GET", "/api/person/10"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], 404);
    assert_eq!(json["message"], "Person Entity가 존재하지 않습니다.");
}

#[tokio::test]
async fn full_update_overwrites_profile_fields() {
    let (router, _store) = app();

    router
        .clone()
        .oneshot(json_request("POST", "/api/person", martine_body()))
        .await
        .unwrap();

    let response = router
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/person/1",
            json!({
                "name": "martine",
                "hobby": "reading",
                "job": "author",
                "phoneNumber": "010-3333-4444"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .oneshot(empty_request("GET", "/api/person/1"))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["name"], "martine");
    assert_eq!(json["hobby"], "reading");
    assert_eq!(json["job"], "author");
    assert_eq!(json["phoneNumber"], "010-3333-4444");
    // Absent request fields overwrite the stored values
    assert_eq!(json["address"], Value::Null);
    assert_eq!(json["birthday"], Value::Null);
}

#[tokio::test]
async fn full_update_rejects_name_change_and_persists_nothing() {
    let (router, _store) = app();

    router
        .clone()
        .oneshot(json_request("POST", "/api/person", martine_body()))
        .await
        .unwrap();

    let response = router
        .clone()
        .oneshot(json_request(
            "PUT",
            "/api/person/1",
            json!({"name": "james", "hobby": "reading"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], 400);
    assert_eq!(json["message"], "이름을 변경 하지 않습니다.");

    // The stored record is untouched
    let response = router
        .oneshot(empty_request("GET", "/api/person/1"))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["name"], "martine");
    assert_eq!(json["hobby"], "programming");
}

#[tokio::test]
async fn full_update_of_missing_person_is_a_bad_request() {
    let (router, _store) = app();

    let response = router
        .oneshot(json_request(
            "PUT",
            "/api/person/10",
            json!({"name": "james"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], 400);
    assert_eq!(json["message"], "Person Entity가 존재하지 않습니다.");
}

#[tokio::test]
async fn rename_changes_only_the_name() {
    let (router, _store) = app();

    router
        .clone()
        .oneshot(json_request("POST", "/api/person", martine_body()))
        .await
        .unwrap();

    let response = router
        .clone()
        .oneshot(empty_request(
            "PATCH",
            "/api/person/1?name=martineModified",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .oneshot(empty_request("GET", "/api/person/1"))
        .await
        .unwrap();
    let json = body_json(response).await;
    assert_eq!(json["name"], "martineModified");
    assert_eq!(json["hobby"], "programming");
    assert_eq!(json["phoneNumber"], "010-1111-2222");
}

#[tokio::test]
async fn rename_missing_person_is_not_found() {
    let (router, _store) = app();

    let response = router
        .oneshot(empty_request("PATCH", "/api/person/10?name=james"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Person Entity가 존재하지 않습니다.");
}

#[tokio::test]
async fn delete_flags_the_record_and_keeps_it_fetchable() {
    let (router, store) = app();

    router
        .clone()
        .oneshot(json_request("POST", "/api/person", martine_body()))
        .await
        .unwrap();

    let response = router
        .clone()
        .oneshot(empty_request("DELETE", "/api/person/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Gone from the default listing, present in the full one
    assert!(store.find_all().await.unwrap().is_empty());
    let all = store.find_all_including_deleted().await.unwrap();
    assert_eq!(all.len(), 1);
    assert!(all.first().unwrap().deleted);

    // Still fetchable by ID, flagged as deleted
    let response = router
        .oneshot(empty_request("GET", "/api/person/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["deleted"], true);
}

#[tokio::test]
async fn delete_missing_person_is_not_found() {
    let (router, _store) = app();

    let response = router
        .oneshot(empty_request("DELETE", "/api/person/10"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
