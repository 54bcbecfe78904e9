//! Token persistence. The backend session is a single bearer token kept in
//! localStorage under `authToken`; the HTTP adapter reads it per request.

use web_sys::window;

const AUTH_TOKEN_KEY: &str = "authToken";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn auth_token() -> Option<String> {
    local_storage()?.get_item(AUTH_TOKEN_KEY).ok()?
}

pub fn save_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(AUTH_TOKEN_KEY, token);
    }
}

pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(AUTH_TOKEN_KEY);
    }
}
