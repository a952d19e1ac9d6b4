use gloo::storage::{LocalStorage, Storage};
use yew::UseStateHandle;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

/// The single key this application persists in browser storage.
const TOKEN_KEY: &str = "horizon.token";

pub fn stored_token() -> Option<String> {
    LocalStorage::get(TOKEN_KEY).ok()
}

pub fn store_token(token: &str) {
    // A full store is the only way this can fail; the session then simply
    // does not survive a reload.
    let _ = LocalStorage::set(TOKEN_KEY, token);
}

pub fn clear_token() {
    LocalStorage::delete(TOKEN_KEY);
}

/// Session context provided at the application root. Screens read the
/// token and build authenticated clients through this handle instead of
/// touching browser storage themselves.
#[derive(Clone, PartialEq)]
pub struct Session {
    token: UseStateHandle<Option<String>>,
}

impl Session {
    pub fn new(token: UseStateHandle<Option<String>>) -> Self {
        Self { token }
    }

    pub fn token(&self) -> Option<String> {
        (*self.token).clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Persist a freshly issued token and make it visible to every screen.
    pub fn login(&self, token: String) {
        Logger::info("session", "signed in, token stored");
        store_token(&token);
        self.token.set(Some(token));
    }

    /// Drop the credential, on explicit logout and on any rejected
    /// authenticated request alike.
    pub fn logout(&self) {
        Logger::info("session", "token cleared");
        clear_token();
        self.token.set(None);
    }

    /// An API client carrying the current bearer token, if any.
    pub fn api(&self) -> ApiClient {
        ApiClient::new().with_token(self.token())
    }
}

#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn token_round_trips_through_storage() {
        clear_token();
        assert_eq!(stored_token(), None);

        store_token("abc123");
        assert_eq!(stored_token(), Some("abc123".to_string()));

        clear_token();
        assert_eq!(stored_token(), None);
    }

    #[wasm_bindgen_test]
    fn clear_is_idempotent() {
        clear_token();
        clear_token();
        assert_eq!(stored_token(), None);
    }
}
