//! Integration tests for the request pipeline against a live HTTP backend.

mod helpers;

use std::sync::Arc;
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::http::{StatusCode, header};
use axum::routing::get;
use serde_json::json;

use licensehub_client::api::LicenseApi;
use licensehub_client::{ApiClient, HttpFailure, RequestError};
use licensehub_core::error::{AppError, ErrorKind};
use licensehub_core::traits::Navigator;
use licensehub_core::types::notice::messages;
use licensehub_core::types::{NavigationIntent, Role};
use licensehub_store::memory::MemoryCredentialStore;

#[tokio::test]
async fn test_concurrent_401_redirects_once() {
    let backend = helpers::MockBackend::start(Router::new().route(
        "/client/dashboard",
        get(|| async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            StatusCode::UNAUTHORIZED
        }),
    ))
    .await;

    let t = helpers::TestConsole::at(&backend.base_url, "/client/dashboard");
    t.console
        .session
        .set_auth("stale", Role::Client, json!({}))
        .expect("set_auth");

    let (first, second) = tokio::join!(
        t.console.customer.dashboard(),
        t.console.customer.dashboard()
    );

    for result in [first, second] {
        let err = result.expect_err("401 must propagate");
        assert_eq!(err.status().map(|s| s.as_u16()), Some(401));
    }

    assert!(!t.console.session.is_authenticated());
    assert!(t.store.is_empty());
    assert_eq!(
        t.navigator.intents(),
        vec![NavigationIntent::HardRedirect("/client/login".into())]
    );
    assert_eq!(t.notifier.count(messages::SESSION_EXPIRED), 1);
}

#[tokio::test]
async fn test_401_in_admin_area_goes_to_admin_login() {
    let backend = helpers::MockBackend::start(Router::new().route(
        "/admin/system/config",
        get(|| async { (StatusCode::UNAUTHORIZED, Json(json!({"error": "token expired"}))) }),
    ))
    .await;

    let t = helpers::TestConsole::new(&backend.base_url);
    t.console
        .session
        .set_auth("adm", Role::Admin, json!({"id": 1}))
        .expect("set_auth");
    t.console.enter("/admin/system").expect("admin may open system settings");

    let err = t.console.admin.system_config().await.expect_err("401");
    assert_eq!(AppError::from(err).kind, ErrorKind::Authentication);
    assert_eq!(
        t.navigator.intents(),
        vec![NavigationIntent::HardRedirect("/admin/login".into())]
    );
}

#[tokio::test]
async fn test_new_login_rearms_expiry_redirect() {
    let backend = helpers::MockBackend::start(
        Router::new().route("/client/dashboard", get(|| async { StatusCode::UNAUTHORIZED })),
    )
    .await;

    let t = helpers::TestConsole::at(&backend.base_url, "/client/dashboard");
    for token in ["first", "second"] {
        t.console
            .session
            .set_auth(token, Role::Client, json!({}))
            .expect("set_auth");
        t.navigator.arrive("/client/dashboard");
        let _ = t.console.customer.dashboard().await;
    }

    assert_eq!(t.navigator.intents().len(), 2);
    assert_eq!(t.notifier.count(messages::SESSION_EXPIRED), 2);
}

#[tokio::test]
async fn test_binary_call_with_json_error_body_is_reclassified() {
    let backend = helpers::MockBackend::start(Router::new().route(
        "/licenses/{id}/download",
        get(|| async {
            (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/octet-stream")],
                r#"{"error":"code already used"}"#,
            )
        }),
    ))
    .await;

    let t = helpers::TestConsole::new(&backend.base_url);
    let err = t
        .console
        .licenses
        .download_to("42", std::env::temp_dir().as_path())
        .await
        .expect_err("400 must propagate");

    assert_eq!(err.message, "code already used");
    assert_eq!(err.kind, ErrorKind::Validation);
    assert!(t.notifier.messages().is_empty());
}

#[tokio::test]
async fn test_binary_call_with_opaque_error_body_stays_raw() {
    let backend = helpers::MockBackend::start(Router::new().route(
        "/licenses/{id}/download",
        get(|| async {
            (
                StatusCode::NOT_FOUND,
                [(header::CONTENT_TYPE, "application/octet-stream")],
                vec![0xffu8, 0x00, 0x13],
            )
        }),
    ))
    .await;

    let t = helpers::TestConsole::new(&backend.base_url);
    let client = ApiClient::new(
        &helpers::config_for(&backend.base_url).api,
        t.console.session.clone(),
        t.notifier.clone(),
        t.navigator.clone(),
    )
    .expect("client");
    let api = LicenseApi::new(Arc::new(client));
    let err = api.download("42").await.expect_err("404 must propagate");

    assert!(matches!(err, RequestError::Http(HttpFailure::Raw(_))));
    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
    assert!(t.notifier.messages().is_empty());
    assert!(t.navigator.intents().is_empty());
}

#[tokio::test]
async fn test_404_generic_notice_only_without_message() {
    let backend = helpers::MockBackend::start(
        Router::new()
            .route("/client/dashboard", get(|| async { StatusCode::NOT_FOUND }))
            .route(
                "/admin/dashboard",
                get(|| async {
                    (StatusCode::NOT_FOUND, Json(json!({"message": "license not found"})))
                }),
            ),
    )
    .await;

    let t = helpers::TestConsole::new(&backend.base_url);

    let bare = t.console.customer.dashboard().await.expect_err("404");
    assert_eq!(bare.business_message(), None);
    assert_eq!(t.notifier.messages(), vec![messages::NOT_FOUND]);

    let specific = t.console.admin.dashboard().await.expect_err("404");
    assert_eq!(specific.business_message(), Some("license not found"));
    assert_eq!(AppError::from(specific).message, "license not found");
    assert_eq!(t.notifier.messages(), vec![messages::NOT_FOUND]);
}

#[tokio::test]
async fn test_500_generic_notice_only_without_message() {
    let backend = helpers::MockBackend::start(
        Router::new()
            .route("/client/dashboard", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
            .route(
                "/admin/dashboard",
                get(|| async {
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({"error": "database unavailable"})),
                    )
                }),
            ),
    )
    .await;

    let t = helpers::TestConsole::new(&backend.base_url);
    let _ = t.console.customer.dashboard().await;
    let err = t.console.admin.dashboard().await.expect_err("500");

    assert_eq!(err.business_message(), Some("database unavailable"));
    assert_eq!(t.notifier.messages(), vec![messages::SERVER_ERROR]);
}

#[tokio::test]
async fn test_403_passes_through_silently() {
    let backend = helpers::MockBackend::start(Router::new().route(
        "/admin/system/config",
        get(|| async { (StatusCode::FORBIDDEN, Json(json!({"error": "super admin only"}))) }),
    ))
    .await;

    let t = helpers::TestConsole::at(&backend.base_url, "/admin/system");
    t.console
        .session
        .set_auth("adm", Role::Admin, json!({"id": 2}))
        .expect("set_auth");

    let err = t.console.admin.system_config().await.expect_err("403");
    assert_eq!(err.business_message(), Some("super admin only"));
    assert!(t.console.session.is_authenticated());
    assert!(t.notifier.messages().is_empty());
    assert!(t.navigator.intents().is_empty());
}

#[tokio::test]
async fn test_timeout_raises_notice() {
    let backend = helpers::MockBackend::start(Router::new().route(
        "/client/dashboard",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({}))
        }),
    ))
    .await;

    let mut config = helpers::config_for(&backend.base_url);
    config.api.request_timeout_ms = 100;
    let t = helpers::TestConsole::build(config, Arc::new(MemoryCredentialStore::new()), "/");

    let err = t.console.customer.dashboard().await.expect_err("timeout");
    assert!(matches!(err, RequestError::Timeout));
    assert_eq!(t.notifier.messages(), vec![messages::TIMEOUT]);
}

#[tokio::test]
async fn test_unreachable_backend_raises_network_notice() {
    let base_url = helpers::closed_base_url().await;
    let t = helpers::TestConsole::new(&base_url);

    let err = t.console.customer.dashboard().await.expect_err("network");
    assert!(matches!(err, RequestError::Network(_)));
    assert_eq!(AppError::from(err).kind, ErrorKind::Network);
    assert_eq!(t.notifier.messages(), vec![messages::NETWORK]);
}

#[tokio::test]
async fn test_empty_success_body_is_accepted() {
    let backend = helpers::MockBackend::start(
        Router::new().route("/client/dashboard", get(|| async { StatusCode::NO_CONTENT })),
    )
    .await;

    let t = helpers::TestConsole::new(&backend.base_url);
    let value = t.console.customer.dashboard().await.expect("empty body");
    assert!(value.is_null());
}
