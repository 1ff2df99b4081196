use contracts::shared::list_envelope::decode_list;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::{ApiError, ApiRequest, BrowserSession, GlooTransport, HttpTransport, Method, RawResponse, Session};
use crate::shared::api_utils::{api_base, join_url};

/// HTTP client bound to one base URL, transport and session
#[derive(Debug, Clone)]
pub struct ApiClient<T, S> {
    base: String,
    transport: T,
    session: S,
}

pub type BrowserClient = ApiClient<GlooTransport, BrowserSession>;

impl BrowserClient {
    pub fn browser() -> Self {
        ApiClient::new(api_base(), GlooTransport, BrowserSession)
    }
}

impl<T: HttpTransport, S: Session> ApiClient<T, S> {
    pub fn new(base: impl Into<String>, transport: T, session: S) -> Self {
        Self {
            base: base.into(),
            transport,
            session,
        }
    }

    pub fn url(&self, endpoint: &str) -> String {
        join_url(&self.base, endpoint)
    }

    /// Send a request and interpret the answer.
    ///
    /// `Ok(None)` for 204 and empty bodies. A 401 ends the session before the
    /// error is returned.
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<String>,
    ) -> Result<Option<Value>, ApiError> {
        let request = ApiRequest {
            method,
            url: self.url(endpoint),
            token: self.session.token(),
            body,
        };
        log::debug!("{} {}", method.as_str(), request.url);

        let response = self.transport.send(request).await?;
        let result = interpret(response);
        if let Err(ApiError::Unauthorized) = &result {
            log::warn!("401 на {}, сессия завершена", endpoint);
            self.session.end();
        }
        result
    }

    pub async fn get(&self, endpoint: &str) -> Result<Option<Value>, ApiError> {
        self.request(Method::Get, endpoint, None).await
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        data: &B,
    ) -> Result<Option<Value>, ApiError> {
        self.request(Method::Post, endpoint, Some(encode(data)?)).await
    }

    pub async fn put<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        data: &B,
    ) -> Result<Option<Value>, ApiError> {
        self.request(Method::Put, endpoint, Some(encode(data)?)).await
    }

    pub async fn patch<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        data: &B,
    ) -> Result<Option<Value>, ApiError> {
        self.request(Method::Patch, endpoint, Some(encode(data)?)).await
    }

    pub async fn delete(&self, endpoint: &str) -> Result<Option<Value>, ApiError> {
        self.request(Method::Delete, endpoint, None).await
    }

    /// GET a collection and decode it through the list envelope
    pub async fn get_list<D: DeserializeOwned>(&self, endpoint: &str) -> Result<Vec<D>, ApiError> {
        let value = self.get(endpoint).await?.unwrap_or(Value::Null);
        Ok(decode_list(value)?)
    }

    /// POST and decode a non-empty JSON answer
    pub async fn post_for<B: Serialize + ?Sized, D: DeserializeOwned>(
        &self,
        endpoint: &str,
        data: &B,
    ) -> Result<D, ApiError> {
        let value = self
            .post(endpoint, data)
            .await?
            .ok_or_else(|| ApiError::Decode("пустой ответ".into()))?;
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn encode<B: Serialize + ?Sized>(data: &B) -> Result<String, ApiError> {
    serde_json::to_string(data).map_err(|e| ApiError::Serialize(e.to_string()))
}

/// Map status and body to the client contract
pub fn interpret(response: RawResponse) -> Result<Option<Value>, ApiError> {
    let RawResponse { status, body } = response;
    if status == 401 {
        return Err(ApiError::Unauthorized);
    }
    if !(200..300).contains(&status) {
        let detail = body.trim();
        return Err(ApiError::Status {
            status,
            detail: if detail.is_empty() {
                "нет подробностей".to_string()
            } else {
                detail.to_string()
            },
        });
    }
    if status == 204 || body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(&body)
        .map(Some)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::testing::{client, MockSession, MockTransport};
    use serde_json::json;

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_interpret_no_content() {
        assert_eq!(interpret(raw(204, "")).unwrap(), None);
        assert_eq!(interpret(raw(200, "  ")).unwrap(), None);
        assert_eq!(interpret(raw(201, "{\"id\":3}")).unwrap(), Some(json!({"id": 3})));
    }

    #[test]
    fn test_interpret_errors() {
        match interpret(raw(404, "")) {
            Err(ApiError::Status { status, detail }) => {
                assert_eq!(status, 404);
                assert_eq!(detail, "нет подробностей");
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert!(matches!(interpret(raw(401, "")), Err(ApiError::Unauthorized)));
        assert!(matches!(interpret(raw(200, "<html>")), Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn test_bearer_and_json_body() {
        let transport = MockTransport::new();
        transport.respond(Method::Post, "/purchases/purchase-orders/", 201, r#"{"id": 1}"#);
        let session = MockSession::with_token("tkn");
        let api = client(&transport, &session);

        let created = api
            .post("/purchases/purchase-orders/", &json!({"number": "PO-1"}))
            .await
            .unwrap();
        assert_eq!(created, Some(json!({"id": 1})));

        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].url, "http://test/api/purchases/purchase-orders/");
        assert_eq!(sent[0].token.as_deref(), Some("tkn"));
        assert_eq!(sent[0].body.as_deref(), Some(r#"{"number":"PO-1"}"#));
    }

    #[tokio::test]
    async fn test_unauthorized_ends_session_for_any_endpoint() {
        for (method, endpoint) in [
            (Method::Get, "/sales/reporting/"),
            (Method::Delete, "/finance/report-lines/4/"),
            (Method::Patch, "/core/user-entity-affiliations/2/"),
        ] {
            let transport = MockTransport::new();
            transport.respond(method, endpoint, 401, "");
            let session = MockSession::with_token("expired");
            let api = client(&transport, &session);

            let body = (method != Method::Get && method != Method::Delete).then(|| "{}".to_string());
            let err = api.request(method, endpoint, body).await.unwrap_err();
            assert!(matches!(err, ApiError::Unauthorized));
            assert!(session.ended(), "{endpoint}");
        }
    }

    #[tokio::test]
    async fn test_other_errors_keep_session() {
        let transport = MockTransport::new();
        transport.respond(Method::Get, "/partners/banks/", 500, "boom");
        let session = MockSession::with_token("t");
        let api = client(&transport, &session);

        let err = api.get("/partners/banks/").await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert!(!session.ended());
    }

    #[tokio::test]
    async fn test_get_list_envelopes() {
        let transport = MockTransport::new();
        transport.respond(Method::Get, "/a/", 200, r#"{"results": [{"id": 1}]}"#);
        transport.respond(Method::Get, "/b/", 200, r#"{"unexpected": true}"#);
        let session = MockSession::default();
        let api = client(&transport, &session);

        let items: Vec<Value> = api.get_list("/a/").await.unwrap();
        assert_eq!(items.len(), 1);
        assert!(matches!(
            api.get_list::<Value>("/b/").await,
            Err(ApiError::Envelope(_))
        ));
        assert!(transport.requests()[0].token.is_none());
    }
}
