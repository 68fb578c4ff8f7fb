//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use parking_lot::Mutex;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use licensehub_cli::Console;
use licensehub_core::config::AppConfig;
use licensehub_core::traits::{Navigator, Notifier};
use licensehub_core::types::{NavigationIntent, Notice};
use licensehub_store::memory::MemoryCredentialStore;

/// In-process backend bound to an ephemeral local port
pub struct MockBackend {
    /// Base URL the console should call
    pub base_url: String,
    handle: JoinHandle<()>,
}

impl MockBackend {
    /// Serve `router` until the backend is dropped
    pub async fn start(router: Router) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr: SocketAddr = listener.local_addr().expect("No local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Mock backend failed");
        });

        Self {
            base_url: format!("http://{addr}"),
            handle,
        }
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Base URL of a local port nothing listens on
pub async fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("No local address");
    drop(listener);
    format!("http://{addr}")
}

/// Notifier that keeps every notice
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    /// Messages raised so far, in order
    pub fn messages(&self) -> Vec<String> {
        self.notices
            .lock()
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }

    /// How many times `message` was raised
    pub fn count(&self, message: &str) -> usize {
        self.notices
            .lock()
            .iter()
            .filter(|n| n.message == message)
            .count()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().push(notice);
    }
}

/// Navigator that keeps every intent it is asked to perform
#[derive(Debug)]
pub struct RecordingNavigator {
    location: Mutex<String>,
    intents: Mutex<Vec<NavigationIntent>>,
}

impl RecordingNavigator {
    /// Start at `path`
    pub fn at(path: &str) -> Self {
        Self {
            location: Mutex::new(path.to_string()),
            intents: Mutex::new(Vec::new()),
        }
    }

    /// Intents performed so far, in order
    pub fn intents(&self) -> Vec<NavigationIntent> {
        self.intents.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.location.lock().clone()
    }

    fn arrive(&self, path: &str) {
        *self.location.lock() = path.to_string();
    }

    fn navigate(&self, intent: &NavigationIntent) {
        self.intents.lock().push(intent.clone());
        *self.location.lock() = intent.target().to_string();
    }
}

/// Console wired to recording collaborators and an in-memory store
pub struct TestConsole {
    /// The console under test
    pub console: Console,
    /// Backing credential store
    pub store: Arc<MemoryCredentialStore>,
    /// Recorded notices
    pub notifier: Arc<RecordingNotifier>,
    /// Recorded navigation
    pub navigator: Arc<RecordingNavigator>,
}

impl TestConsole {
    /// Console calling `base_url`, starting at the landing route
    pub fn new(base_url: &str) -> Self {
        Self::build(config_for(base_url), Arc::new(MemoryCredentialStore::new()), "/")
    }

    /// Console calling `base_url`, starting at `path`
    pub fn at(base_url: &str, path: &str) -> Self {
        Self::build(config_for(base_url), Arc::new(MemoryCredentialStore::new()), path)
    }

    /// Console from explicit parts
    pub fn build(config: AppConfig, store: Arc<MemoryCredentialStore>, path: &str) -> Self {
        let notifier = Arc::new(RecordingNotifier::default());
        let navigator = Arc::new(RecordingNavigator::at(path));
        let console = Console::assemble(
            &config,
            store.clone(),
            notifier.clone(),
            navigator.clone(),
        )
        .expect("Failed to assemble console");

        Self {
            console,
            store,
            notifier,
            navigator,
        }
    }
}

/// Test configuration pointing at `base_url` with short timeouts
pub fn config_for(base_url: &str) -> AppConfig {
    let mut config = AppConfig::default();
    config.api.base_url = base_url.to_string();
    config.api.request_timeout_ms = 2_000;
    config.api.upload_timeout_ms = 2_000;
    config.api.backup_timeout_ms = 2_000;
    config.storage.provider = "memory".to_string();
    config
}
