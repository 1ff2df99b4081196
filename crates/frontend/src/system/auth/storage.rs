//! Tokens in `localStorage`. The access token is what the HTTP client sends;
//! the refresh token is only kept for the token service.

use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "auth_access_token";
const REFRESH_TOKEN_KEY: &str = "auth_refresh_token";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save both tokens; a missing refresh token removes a stale one
pub fn save_tokens(access: &str, refresh: Option<&str>) {
    let Some(storage) = get_local_storage() else {
        log::warn!("localStorage недоступен, токен не сохранён");
        return;
    };
    let _ = storage.set_item(ACCESS_TOKEN_KEY, access);
    let _ = match refresh {
        Some(token) => storage.set_item(REFRESH_TOKEN_KEY, token),
        None => storage.remove_item(REFRESH_TOKEN_KEY),
    };
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    get_local_storage()?
        .get_item(ACCESS_TOKEN_KEY)
        .ok()?
        .filter(|t| !t.is_empty())
}

/// Clear all authentication tokens
pub fn clear_tokens() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(REFRESH_TOKEN_KEY);
    }
}
