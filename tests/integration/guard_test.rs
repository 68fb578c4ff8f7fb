//! Integration tests for route guarding through the console.

mod helpers;

use std::sync::Arc;

use serde_json::json;

use licensehub_auth::{GuardDecision, RouteGuard};
use licensehub_cli::Console;
use licensehub_core::error::ErrorKind;
use licensehub_core::traits::{CredentialStore, Navigator};
use licensehub_core::types::{NavigationIntent, Role};
use licensehub_store::keys;
use licensehub_store::StoreManager;
use licensehub_store::memory::MemoryCredentialStore;

const OFFLINE: &str = "http://127.0.0.1:9";

#[tokio::test]
async fn test_anonymous_admin_route_goes_to_admin_login() {
    let t = helpers::TestConsole::new(OFFLINE);

    let err = t.console.enter("/admin/system").expect_err("guarded");
    assert_eq!(err.kind, ErrorKind::Authentication);
    assert_eq!(
        t.navigator.intents(),
        vec![NavigationIntent::Redirect("/admin/login".into())]
    );
    assert_eq!(t.navigator.current_path(), "/admin/login");
}

#[tokio::test]
async fn test_anonymous_client_route_goes_to_client_login() {
    let t = helpers::TestConsole::new(OFFLINE);

    let err = t.console.enter("/client/dashboard").expect_err("guarded");
    assert_eq!(err.kind, ErrorKind::Authentication);
    assert_eq!(
        t.navigator.intents(),
        vec![NavigationIntent::Redirect("/client/login".into())]
    );
}

#[tokio::test]
async fn test_role_mismatch_downgrades_to_landing() {
    let t = helpers::TestConsole::new(OFFLINE);
    t.console
        .session
        .set_auth("tok", Role::Client, json!({}))
        .expect("set_auth");

    let err = t.console.enter("/admin/dashboard").expect_err("guarded");
    assert_eq!(err.kind, ErrorKind::Authorization);
    assert_eq!(
        t.navigator.intents(),
        vec![NavigationIntent::Redirect("/".into())]
    );
    assert!(t.console.session.is_authenticated());
}

#[tokio::test]
async fn test_admin_layout_resolves_to_dashboard() {
    let t = helpers::TestConsole::new(OFFLINE);
    t.console
        .session
        .set_auth("tok", Role::Admin, json!({"id": 1}))
        .expect("set_auth");

    let reached = t.console.enter("/admin").expect("allowed");
    assert_eq!(reached, "/admin/dashboard");
    assert_eq!(t.navigator.current_path(), "/admin/dashboard");
    assert!(t.navigator.intents().is_empty());
}

#[tokio::test]
async fn test_unknown_and_public_paths_are_open() {
    let t = helpers::TestConsole::new(OFFLINE);

    assert_eq!(t.console.enter("/no/such/page").expect("public"), "/no/such/page");
    assert_eq!(t.console.enter("/").expect("public"), "/client/login");
    assert_eq!(t.console.enter("/admin/login").expect("public"), "/admin/login");
    assert!(t.navigator.intents().is_empty());
}

#[tokio::test]
async fn test_restored_session_passes_guard() {
    let store = Arc::new(MemoryCredentialStore::new());
    store
        .set_many(&[
            (keys::TOKEN, "persisted"),
            (keys::ROLE, "client"),
            (keys::USER_INFO, r#"{"id":9,"name":"Acme"}"#),
        ])
        .expect("seed store");

    let t = helpers::TestConsole::build(helpers::config_for(OFFLINE), store, "/");
    assert_eq!(t.console.session.user_info(), json!({"id": 9, "name": "Acme"}));
    assert_eq!(
        t.console.enter("/client/dashboard").expect("allowed"),
        "/client/dashboard"
    );
}

/// Open a console over the file store configured in `config`, the way the
/// binary does at start-up.
fn open_with_file_store(config: &licensehub_core::config::AppConfig) -> Console {
    let store = StoreManager::new(&config.storage).expect("file store");
    Console::assemble(
        config,
        Arc::new(store),
        Arc::new(helpers::RecordingNotifier::default()),
        Arc::new(helpers::RecordingNavigator::at("/")),
    )
    .expect("assemble console")
}

#[tokio::test]
async fn test_file_store_session_survives_restart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut config = helpers::config_for(OFFLINE);
    config.storage.provider = "file".to_string();
    config.storage.path = dir
        .path()
        .join("credentials.json")
        .to_string_lossy()
        .into_owned();

    let first = open_with_file_store(&config);
    assert!(!first.session.is_authenticated());
    first
        .session
        .set_auth("adm-tok", Role::Admin, json!({"id": 1, "username": "root"}))
        .expect("set_auth");
    drop(first);

    let second = open_with_file_store(&config);
    assert!(second.session.is_admin());
    assert_eq!(second.session.token(), "adm-tok");
    assert_eq!(
        second.session.user_info(),
        json!({"id": 1, "username": "root"})
    );
    assert_eq!(second.enter("/admin/system").expect("allowed"), "/admin/system");

    second.session.clear_auth().expect("clear_auth");
    drop(second);

    let third = open_with_file_store(&config);
    assert!(!third.session.is_authenticated());
    assert!(third.enter("/admin/dashboard").is_err());
}

#[tokio::test]
async fn test_inconsistent_persisted_session_is_cleared() {
    let store = Arc::new(MemoryCredentialStore::new());
    store.set(keys::ROLE, "admin").expect("seed store");

    let t = helpers::TestConsole::build(helpers::config_for(OFFLINE), store.clone(), "/");
    assert!(!t.console.session.is_authenticated());
    assert!(store.is_empty());
    assert!(t.console.enter("/admin/dashboard").is_err());
}

#[tokio::test]
async fn test_guard_is_total_over_metadata_and_session() {
    let table = licensehub_auth::RouteTable::console();
    for route in table.routes() {
        for (authenticated, role) in [
            (false, Role::None),
            (true, Role::Client),
            (true, Role::Admin),
        ] {
            let decision = RouteGuard::decide(&route.meta, authenticated, role);
            match (route.meta.requires_auth, authenticated, route.meta.role) {
                (false, _, _) => assert_eq!(decision, GuardDecision::Allow),
                (true, false, _) => assert!(!decision.is_allowed()),
                (true, true, Some(required)) if required != role => {
                    assert_eq!(decision, GuardDecision::Redirect("/".into()))
                }
                _ => assert_eq!(decision, GuardDecision::Allow),
            }
        }
    }
}
