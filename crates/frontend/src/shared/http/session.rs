use crate::system::auth::storage;

/// Route the browser is sent to when the session ends
pub const LOGIN_ROUTE: &str = "/login";

/// Source of the bearer token and the way to end the session on 401
pub trait Session {
    fn token(&self) -> Option<String>;

    /// Drop stored credentials and leave the application
    fn end(&self);
}

/// Tokens in localStorage, navigation via `window.location`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSession;

impl Session for BrowserSession {
    fn token(&self) -> Option<String> {
        storage::get_access_token()
    }

    fn end(&self) {
        storage::clear_tokens();
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(LOGIN_ROUTE) {
                log::error!("не удалось перейти на {}: {:?}", LOGIN_ROUTE, e);
            }
        }
    }
}

/// No token and nothing to end: used for the login request itself
#[derive(Debug, Clone, Copy, Default)]
pub struct AnonymousSession;

impl Session for AnonymousSession {
    fn token(&self) -> Option<String> {
        None
    }

    fn end(&self) {}
}
