use contracts::system::auth::{LoginRequest, LoginResponse};

use crate::shared::api_utils::api_base;
use crate::shared::http::{AnonymousSession, ApiClient, ApiError, GlooTransport, HttpTransport, Session};

pub const TOKEN_ENDPOINT: &str = "/auth/token/";

fn login_error(e: ApiError) -> String {
    match e.status() {
        Some(400) | Some(401) => "Неверный логин или пароль".to_string(),
        _ => format!("Ошибка входа: {}", e),
    }
}

pub async fn login_with<T: HttpTransport, S: Session>(
    api: &ApiClient<T, S>,
    username: String,
    password: String,
) -> Result<LoginResponse, String> {
    let request = LoginRequest { username, password };
    api.post_for::<_, LoginResponse>(TOKEN_ENDPOINT, &request)
        .await
        .map_err(login_error)
}

/// Login with username and password.
///
/// Sent without a session: a rejected password must not look like an
/// expired token.
pub async fn login(username: String, password: String) -> Result<LoginResponse, String> {
    let api = ApiClient::new(api_base(), GlooTransport, AnonymousSession);
    login_with(&api, username, password).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::testing::MockTransport;
    use crate::shared::http::Method;

    fn anonymous(t: &MockTransport) -> ApiClient<MockTransport, AnonymousSession> {
        ApiClient::new("http://test/api", t.clone(), AnonymousSession)
    }

    #[tokio::test]
    async fn test_login_posts_credentials() {
        let t = MockTransport::new();
        t.respond(Method::Post, TOKEN_ENDPOINT, 200, r#"{"access": "a1", "refresh": "r1"}"#);

        let response = login_with(&anonymous(&t), "admin".into(), "secret".into())
            .await
            .unwrap();

        assert_eq!(response.access, "a1");
        assert_eq!(response.refresh.as_deref(), Some("r1"));
        let requests = t.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "http://test/api/auth/token/");
        assert_eq!(requests[0].token, None);
        assert_eq!(
            requests[0].body.as_deref(),
            Some(r#"{"username":"admin","password":"secret"}"#)
        );
    }

    #[tokio::test]
    async fn test_rejected_credentials() {
        let t = MockTransport::new();
        t.respond(Method::Post, TOKEN_ENDPOINT, 401, r#"{"detail": "No active account"}"#);

        let err = login_with(&anonymous(&t), "admin".into(), "bad".into())
            .await
            .unwrap_err();

        assert_eq!(err, "Неверный логин или пароль");
    }

    #[tokio::test]
    async fn test_network_failure_is_reported() {
        let t = MockTransport::new();
        t.fail_network(Method::Post, TOKEN_ENDPOINT);

        let err = login_with(&anonymous(&t), "admin".into(), "x".into())
            .await
            .unwrap_err();

        assert!(err.starts_with("Ошибка входа: "));
    }
}
