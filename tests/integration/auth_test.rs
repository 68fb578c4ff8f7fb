//! Integration tests for the login and logout flows.

mod helpers;

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::{get, post};
use parking_lot::Mutex;
use serde_json::{Value, json};

use licensehub_core::error::ErrorKind;
use licensehub_core::traits::CredentialStore;
use licensehub_core::types::Role;
use licensehub_core::types::notice::messages;
use licensehub_store::keys;

fn bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

#[tokio::test]
async fn test_client_login_sets_and_persists_session() {
    let seen = Arc::new(Mutex::new(Value::Null));
    let recorded = seen.clone();

    let backend = helpers::MockBackend::start(Router::new().route(
        "/login",
        post(move |Json(body): Json<Value>| {
            let recorded = recorded.clone();
            async move {
                *recorded.lock() = body;
                Json(json!({
                    "session_token": "sess-1",
                    "customer_info": {"id": 5, "name": "Acme"}
                }))
            }
        }),
    ))
    .await;

    let t = helpers::TestConsole::new(&backend.base_url);
    let record = t
        .console
        .auth
        .client_login("AUTH-123", "captcha-ok")
        .await
        .expect("login should succeed");

    assert_eq!(
        *seen.lock(),
        json!({"authorization_code": "AUTH-123", "captcha_token": "captcha-ok"})
    );
    assert_eq!(record.token, "sess-1");
    assert_eq!(record.role, Role::Client);
    assert!(t.console.session.is_authenticated());
    assert!(t.console.session.is_client());
    assert_eq!(t.console.session.user_info(), json!({"id": 5, "name": "Acme"}));

    assert_eq!(t.store.get(keys::TOKEN).unwrap(), Some("sess-1".to_string()));
    assert_eq!(t.store.get(keys::ROLE).unwrap(), Some("client".to_string()));
    assert_eq!(t.notifier.messages(), vec![messages::LOGIN_SUCCESS]);
}

#[tokio::test]
async fn test_admin_login_keeps_admin_record() {
    let backend = helpers::MockBackend::start(Router::new().route(
        "/admin/login",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["username"], "root");
            assert_eq!(body["totp_code"], "123456");
            Json(json!({
                "token": "adm-tok",
                "expires_in": 3600,
                "admin": {"id": 1, "username": "root"}
            }))
        }),
    ))
    .await;

    let t = helpers::TestConsole::new(&backend.base_url);
    t.console
        .auth
        .admin_login("root", "s3cret", "123456")
        .await
        .expect("admin login should succeed");

    assert!(t.console.session.is_admin());
    assert_eq!(t.console.session.token(), "adm-tok");
    assert_eq!(
        t.console.session.user_info(),
        json!({"id": 1, "username": "root"})
    );
}

#[tokio::test]
async fn test_login_failure_surfaces_business_message() {
    let backend = helpers::MockBackend::start(Router::new().route(
        "/login",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"message": "bad request", "error": "authorization code already used"})),
            )
        }),
    ))
    .await;

    let t = helpers::TestConsole::new(&backend.base_url);
    let err = t
        .console
        .auth
        .client_login("AUTH-USED", "captcha")
        .await
        .expect_err("login should fail");

    assert_eq!(err.message, "authorization code already used");
    assert_eq!(err.kind, ErrorKind::Validation);
    assert!(!t.console.session.is_authenticated());
    assert!(t.store.is_empty());
    assert_eq!(t.notifier.messages(), vec!["authorization code already used"]);
    assert!(t.navigator.intents().is_empty());
}

#[tokio::test]
async fn test_login_failure_without_message_is_generic() {
    let backend = helpers::MockBackend::start(
        Router::new().route("/admin/login", post(|| async { StatusCode::BAD_REQUEST })),
    )
    .await;

    let t = helpers::TestConsole::new(&backend.base_url);
    let err = t
        .console
        .auth
        .admin_login("root", "wrong", "")
        .await
        .expect_err("login should fail");

    assert_eq!(err.message, messages::LOGIN_FAILED);
    assert_eq!(t.notifier.messages(), vec![messages::LOGIN_FAILED]);
}

#[tokio::test]
async fn test_bearer_attached_after_login() {
    let backend = helpers::MockBackend::start(
        Router::new()
            .route(
                "/login",
                post(|| async { Json(json!({"session_token": "sess-9", "customer_info": {}})) }),
            )
            .route(
                "/client/dashboard",
                get(|headers: HeaderMap| async move {
                    Json(json!({"authorization": bearer(&headers)}))
                }),
            ),
    )
    .await;

    let t = helpers::TestConsole::new(&backend.base_url);
    t.console
        .auth
        .client_login("AUTH-1", "captcha")
        .await
        .expect("login should succeed");

    let dashboard = t.console.customer.dashboard().await.expect("dashboard");
    assert_eq!(dashboard["authorization"], "Bearer sess-9");
}

#[tokio::test]
async fn test_admin_logout_calls_admin_endpoint_and_clears() {
    let hits = Arc::new(Mutex::new(Vec::new()));
    let recorded = hits.clone();

    let backend = helpers::MockBackend::start(Router::new().route(
        "/admin/logout",
        post(move |headers: HeaderMap| {
            let recorded = recorded.clone();
            async move {
                recorded.lock().push(bearer(&headers));
                Json(json!({"message": "ok"}))
            }
        }),
    ))
    .await;

    let t = helpers::TestConsole::new(&backend.base_url);
    t.console
        .session
        .set_auth("adm-tok", Role::Admin, json!({"id": 1}))
        .expect("set_auth");

    t.console.auth.logout().await.expect("logout");

    assert_eq!(*hits.lock(), vec![Some("Bearer adm-tok".to_string())]);
    assert!(!t.console.session.is_authenticated());
    assert!(t.store.is_empty());
    assert_eq!(t.notifier.messages(), vec![messages::LOGGED_OUT]);
}

#[tokio::test]
async fn test_logout_succeeds_when_backend_unreachable() {
    let base_url = helpers::closed_base_url().await;
    let t = helpers::TestConsole::new(&base_url);
    t.console
        .session
        .set_auth("sess-1", Role::Client, json!({}))
        .expect("set_auth");

    t.console.auth.logout().await.expect("logout must succeed locally");

    assert!(!t.console.session.is_authenticated());
    assert!(t.store.is_empty());
    assert_eq!(
        t.notifier.messages(),
        vec![messages::NETWORK, messages::LOGGED_OUT]
    );
}

#[tokio::test]
async fn test_logout_without_session_skips_backend() {
    let hits = Arc::new(Mutex::new(0usize));
    let counter = hits.clone();

    let backend = helpers::MockBackend::start(Router::new().route(
        "/logout",
        post(move || {
            let counter = counter.clone();
            async move {
                *counter.lock() += 1;
                StatusCode::OK
            }
        }),
    ))
    .await;

    let t = helpers::TestConsole::new(&backend.base_url);
    t.console.auth.logout().await.expect("logout");

    assert_eq!(*hits.lock(), 0);
    assert_eq!(t.notifier.messages(), vec![messages::LOGGED_OUT]);
}

#[tokio::test]
async fn test_public_key_without_session_sends_no_credentials() {
    let backend = helpers::MockBackend::start(Router::new().route(
        "/public-key",
        get(|headers: HeaderMap| async move {
            assert!(bearer(&headers).is_none());
            Json(json!({"public_key": "-----BEGIN PUBLIC KEY-----"}))
        }),
    ))
    .await;

    let t = helpers::TestConsole::new(&backend.base_url);
    let key = t.console.auth.public_key().await.expect("public key");
    assert_eq!(key["public_key"], "-----BEGIN PUBLIC KEY-----");
}
