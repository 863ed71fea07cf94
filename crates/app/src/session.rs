//! Session token storage.
//!
//! The token is an opaque string kept under [`SESSION_TOKEN_KEY`]. Its
//! presence is the only thing the guard looks at; nothing here knows about
//! expiry or refresh.

use std::cell::RefCell;
use std::rc::Rc;

use shared_types::SESSION_TOKEN_KEY;

/// Read/write access to the persisted session token.
pub trait SessionProvider {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);

    /// A blank token counts as signed out.
    fn is_authenticated(&self) -> bool {
        self.get().is_some_and(|t| !t.trim().is_empty())
    }
}

/// Process-local store. Used by tests and by server-side rendering, where
/// there is no user storage to read.
#[derive(Debug, Default)]
pub struct MemorySession {
    token: RefCell<Option<String>>,
}

impl MemorySession {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RefCell::new(Some(token.into())),
        }
    }
}

impl SessionProvider for MemorySession {
    fn get(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

/// Browser `localStorage`.
#[cfg(all(feature = "web", target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct BrowserSession;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
impl BrowserSession {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
impl SessionProvider for BrowserSession {
    fn get(&self) -> Option<String> {
        Self::storage()?.get_item(SESSION_TOKEN_KEY).ok().flatten()
    }

    fn set(&self, token: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(SESSION_TOKEN_KEY, token).is_err() {
                    tracing::warn!("localStorage rejected the session token");
                }
            }
            None => tracing::warn!("localStorage unavailable, session not saved"),
        }
    }

    fn clear(&self) {
        match Self::storage() {
            Some(storage) => {
                if storage.remove_item(SESSION_TOKEN_KEY).is_err() {
                    tracing::warn!("localStorage refused to remove the session token");
                }
            }
            None => tracing::warn!("localStorage unavailable, session not cleared"),
        }
    }
}

/// JSON file holding `{ "adminToken": "..." }`, for desktop and mobile builds.
///
/// The file is re-read on every `get` so it stays the single source of truth.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileSession {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileSession {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_map(&self) -> serde_json::Map<String, serde_json::Value> {
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default()
    }

    fn write_map(&self, map: &serde_json::Map<String, serde_json::Value>) {
        let result = serde_json::to_string_pretty(map)
            .map_err(std::io::Error::other)
            .and_then(|json| std::fs::write(&self.path, json));
        if let Err(e) = result {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to write session file");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SessionProvider for FileSession {
    fn get(&self) -> Option<String> {
        self.read_map()
            .get(SESSION_TOKEN_KEY)
            .and_then(|v| v.as_str())
            .map(str::to_string)
    }

    fn set(&self, token: &str) {
        let mut map = self.read_map();
        map.insert(SESSION_TOKEN_KEY.to_string(), token.into());
        self.write_map(&map);
    }

    fn clear(&self) {
        let mut map = self.read_map();
        if map.remove(SESSION_TOKEN_KEY).is_some() {
            self.write_map(&map);
        }
    }
}

/// Cloneable handle stored in Dioxus context.
#[derive(Clone)]
pub struct SessionHandle(Rc<dyn SessionProvider>);

impl SessionHandle {
    pub fn new(provider: impl SessionProvider + 'static) -> Self {
        Self(Rc::new(provider))
    }
}

impl std::ops::Deref for SessionHandle {
    type Target = dyn SessionProvider;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// The provider for the current build target.
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub fn platform_session(_config: &shared_types::AppConfig) -> SessionHandle {
    SessionHandle::new(BrowserSession)
}

#[cfg(all(
    any(feature = "desktop", feature = "mobile"),
    not(feature = "server"),
    not(target_arch = "wasm32")
))]
pub fn platform_session(config: &shared_types::AppConfig) -> SessionHandle {
    SessionHandle::new(FileSession::new(&config.session.file))
}

#[cfg(not(any(
    all(feature = "web", target_arch = "wasm32"),
    all(
        any(feature = "desktop", feature = "mobile"),
        not(feature = "server"),
        not(target_arch = "wasm32")
    )
)))]
pub fn platform_session(_config: &shared_types::AppConfig) -> SessionHandle {
    SessionHandle::new(MemorySession::default())
}
