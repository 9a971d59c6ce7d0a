use std::sync::Mutex;
use tracing::info;

pub const LOGIN_PATH: &str = "/login";

/// Navigation sink. The HTTP adapter drives it on 401 and the guards hand
/// their redirects to it; a UI shell would swap in its own router binding.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
    fn current_path(&self) -> String;
}

/// Default navigator: tracks the current location behind a mutex.
pub struct LocationNavigator {
    current: Mutex<String>,
}

impl LocationNavigator {
    pub fn new() -> Self {
        Self {
            current: Mutex::new("/".to_string()),
        }
    }
}

impl Default for LocationNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for LocationNavigator {
    fn navigate(&self, path: &str) {
        let mut current = self.current.lock().unwrap();
        if *current != path {
            info!(from = %current, to = path, "navigate");
        }
        *current = path.to_string();
    }

    fn current_path(&self) -> String {
        self.current.lock().unwrap().clone()
    }
}
