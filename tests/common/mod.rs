#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::Router;
use recruitment_client::config::Config;
use recruitment_client::models::user::{Role, User};
use recruitment_client::routing::navigator::Navigator;
use recruitment_client::storage::{MemoryStorage, Storage, ACCESS_TOKEN_KEY, USER_KEY};
use recruitment_client::AppState;

/// Navigator that records every navigation, so tests can assert the 401
/// side effect fires exactly once.
#[derive(Default)]
pub struct RecordingNavigator {
    history: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<String> {
        self.history.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.history.lock().unwrap().push(path.to_string());
    }

    fn current_path(&self) -> String {
        self.history
            .lock()
            .unwrap()
            .last()
            .cloned()
            .unwrap_or_else(|| "/".to_string())
    }
}

/// Simple shared hit counter for mock endpoints.
#[derive(Default, Clone)]
pub struct HitCounter(Arc<AtomicUsize>);

impl HitCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Binds the mock platform API to an ephemeral port and serves it for the
/// lifetime of the test process.
pub async fn spawn_mock_api(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock api");
    let addr = listener.local_addr().expect("mock api addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve mock api");
    });
    addr
}

pub struct TestContext {
    pub app: AppState,
    pub storage: Arc<MemoryStorage>,
    pub navigator: Arc<RecordingNavigator>,
}

/// Client wired against the mock API with in-memory storage.
pub fn test_context(addr: SocketAddr) -> TestContext {
    let storage = Arc::new(MemoryStorage::new());
    let navigator = Arc::new(RecordingNavigator::new());
    let config = Config::for_base_url(format!("http://{}", addr), "/tmp/unused");
    let app = AppState::with_parts(&config, storage.clone(), navigator.clone()).expect("app state");
    TestContext {
        app,
        storage,
        navigator,
    }
}

/// Like `test_context`, but with a persisted session already in storage, as
/// if a previous run had logged in.
pub fn seeded_context(addr: SocketAddr, role: Role, token: &str) -> TestContext {
    let storage = Arc::new(MemoryStorage::new());
    let email = match role {
        Role::Hr => "e@mail.ru",
        Role::Applicant => "a@mail.ru",
    };
    let user = User::from_auth(1, email, role, None);
    storage.set(ACCESS_TOKEN_KEY, token);
    storage.set(USER_KEY, &serde_json::to_string(&user).unwrap());

    let navigator = Arc::new(RecordingNavigator::new());
    let config = Config::for_base_url(format!("http://{}", addr), "/tmp/unused");
    let app = AppState::with_parts(&config, storage.clone(), navigator.clone()).expect("app state");
    TestContext {
        app,
        storage,
        navigator,
    }
}
