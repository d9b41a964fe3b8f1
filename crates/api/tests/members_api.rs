//! Integration tests for enterprise membership and tenant scoping.

mod common;

use axum::http::{Method, StatusCode};
use chrono::{Duration, Utc};
use sqlx::PgPool;

/// Add a member through the API and return their access token.
async fn add_and_login_member(app: &axum::Router, owner_token: &str, name: &str) -> String {
    let response = common::send_json(
        app.clone(),
        Method::POST,
        "/api/v1/users",
        Some(owner_token),
        serde_json::json!({
            "username": name,
            "email": format!("{name}@example.com"),
            "password": "member-password-123",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK, "add member failed");

    let response = common::send_json(
        app.clone(),
        Method::POST,
        "/api/v1/auth/login",
        None,
        serde_json::json!({
            "username": name,
            "password": "member-password-123",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK, "member login failed");

    let json = common::body_json(response).await;
    json["data"]["access_token"].as_str().unwrap().to_string()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn member_sees_enterprise_records(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (owner_token, _) = common::register_enterprise(&app, "acme").await;

    let response = common::send_json(
        app.clone(),
        Method::POST,
        "/api/v1/payments",
        Some(&owner_token),
        serde_json::json!({
            "user_id": null,
            "title": "Condomínio Janeiro",
            "amount_cents": 50_000,
            "due_date": (Utc::now() + Duration::days(5)).to_rfc3339(),
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let member_token = add_and_login_member(&app, &owner_token, "alice").await;

    // The member's listing resolves to the enterprise scope.
    let response = common::get_auth(app, "/api/v1/payments", &member_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"][0]["title"], "Condomínio Janeiro");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn regular_member_cannot_create_payments(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (owner_token, _) = common::register_enterprise(&app, "acme").await;
    let member_token = add_and_login_member(&app, &owner_token, "alice").await;

    let response = common::send_json(
        app,
        Method::POST,
        "/api/v1/payments",
        Some(&member_token),
        serde_json::json!({
            "user_id": null,
            "title": "Taxa inventada",
            "amount_cents": 100,
            "due_date": Utc::now().to_rfc3339(),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = common::body_json(response).await;
    assert_eq!(json["code"], "FORBIDDEN");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn member_check_inherits_enterprise_scope(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (owner_token, _) = common::register_enterprise(&app, "acme").await;

    common::send_json(
        app.clone(),
        Method::POST,
        "/api/v1/payments",
        Some(&owner_token),
        serde_json::json!({
            "user_id": null,
            "title": "Condomínio Janeiro",
            "amount_cents": 50_000,
            "due_date": (Utc::now() + Duration::days(5)).to_rfc3339(),
        }),
    )
    .await;

    let member_token = add_and_login_member(&app, &owner_token, "alice").await;

    // The member gets their own reminder for the enterprise's payment.
    let response = common::send_json(
        app.clone(),
        Method::POST,
        "/api/v1/notifications/check",
        Some(&member_token),
        serde_json::json!({}),
    )
    .await;
    let json = common::body_json(response).await;
    assert_eq!(json["data"]["notifications_created"], 1);

    let response = common::get_auth(app, "/api/v1/notifications", &member_token).await;
    let json = common::body_json(response).await;
    assert_eq!(json["data"][0]["kind"], "payment");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn announcement_fans_out_generic_notifications(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (owner_token, _) = common::register_enterprise(&app, "acme").await;
    let member_token = add_and_login_member(&app, &owner_token, "alice").await;

    let response = common::send_json(
        app.clone(),
        Method::POST,
        "/api/v1/announcements",
        Some(&owner_token),
        serde_json::json!({
            "title": "Manutenção do elevador",
            "body": "O elevador ficará indisponível na sexta-feira.",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // The member receives a generic notification; the author does not.
    let response = common::get_auth(app.clone(), "/api/v1/notifications", &member_token).await;
    let json = common::body_json(response).await;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["kind"], "generic");
    assert_eq!(items[0]["title"], "Manutenção do elevador");

    let response = common::get_auth(app, "/api/v1/notifications", &owner_token).await;
    let json = common::body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deactivated_member_cannot_act(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (owner_token, _) = common::register_enterprise(&app, "acme").await;
    let member_token = add_and_login_member(&app, &owner_token, "alice").await;

    // Find the member id via the members listing.
    let response = common::get_auth(app.clone(), "/api/v1/users", &owner_token).await;
    let json = common::body_json(response).await;
    let member_id = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["username"] == "alice")
        .unwrap()["id"]
        .as_i64()
        .unwrap();

    let response = common::send_json(
        app.clone(),
        Method::POST,
        &format!("/api/v1/users/{member_id}/deactivate"),
        Some(&owner_token),
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // The member's still-valid token no longer grants access to scoped
    // resources.
    let response = common::get_auth(app, "/api/v1/payments", &member_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
