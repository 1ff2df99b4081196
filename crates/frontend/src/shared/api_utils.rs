//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Compile-time override of the API base, e.g. `https://erp.example.com/api`
const API_BASE_OVERRIDE: Option<&str> = option_env!("ERP_API_BASE");

/// Port the backend listens on when the base is derived from the window location
const BACKEND_PORT: u16 = 8000;

/// Get the base URL for API requests
///
/// `ERP_API_BASE` wins when it was set at build time. Otherwise the base is
/// derived from the current window location, e.g. `http://localhost:8000/api`.
/// Returns an empty string when there is no window (native tests).
pub fn api_base() -> String {
    if let Some(base) = API_BASE_OVERRIDE {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_from_location(&protocol, &hostname)
}

fn base_from_location(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}/api", protocol, hostname, BACKEND_PORT)
}

/// Join a base and an endpoint path (`/purchases/purchase-orders/`)
pub fn join_url(base: &str, endpoint: &str) -> String {
    let base = base.trim_end_matches('/');
    if endpoint.starts_with('/') {
        format!("{}{}", base, endpoint)
    } else {
        format!("{}/{}", base, endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_from_location() {
        assert_eq!(
            base_from_location("https:", "erp.local"),
            "https://erp.local:8000/api"
        );
    }

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://h:8000/api/", "/sales/reporting/"),
            "http://h:8000/api/sales/reporting/"
        );
        assert_eq!(join_url("http://h/api", "auth/token/"), "http://h/api/auth/token/");
    }
}
