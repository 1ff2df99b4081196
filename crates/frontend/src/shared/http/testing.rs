//! In-memory transport and session for client tests.

use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use super::{ApiClient, ApiError, ApiRequest, HttpTransport, Method, RawResponse, Session};

enum Reply {
    Raw(RawResponse),
    NetworkDown,
}

struct Route {
    method: Method,
    suffix: String,
    replies: VecDeque<Reply>,
}

#[derive(Default)]
struct Inner {
    requests: Vec<ApiRequest>,
    routes: Vec<Route>,
}

/// Records every request. Answers from routes matched by method and URL
/// suffix; queued replies are consumed in order, the last one repeats.
/// Unrouted GETs get `[]`, everything else 204.
#[derive(Clone, Default)]
pub struct MockTransport {
    inner: Rc<RefCell<Inner>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, method: Method, suffix: &str, status: u16, body: &str) {
        self.push(
            method,
            suffix,
            Reply::Raw(RawResponse {
                status,
                body: body.to_string(),
            }),
        );
    }

    pub fn fail_network(&self, method: Method, suffix: &str) {
        self.push(method, suffix, Reply::NetworkDown);
    }

    fn push(&self, method: Method, suffix: &str, reply: Reply) {
        let mut inner = self.inner.borrow_mut();
        if let Some(route) = inner
            .routes
            .iter_mut()
            .find(|r| r.method == method && r.suffix == suffix)
        {
            route.replies.push_back(reply);
            return;
        }
        inner.routes.push(Route {
            method,
            suffix: suffix.to_string(),
            replies: VecDeque::from([reply]),
        });
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.inner.borrow().requests.clone()
    }

    pub fn count(&self, method: Method) -> usize {
        self.inner
            .borrow()
            .requests
            .iter()
            .filter(|r| r.method == method)
            .count()
    }
}

#[async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let mut inner = self.inner.borrow_mut();
        inner.requests.push(request.clone());

        let route = inner
            .routes
            .iter_mut()
            .find(|r| r.method == request.method && request.url.ends_with(&r.suffix));
        let reply = match route {
            Some(route) if route.replies.len() > 1 => route.replies.pop_front(),
            Some(route) => route.replies.front().map(|r| match r {
                Reply::Raw(raw) => Reply::Raw(raw.clone()),
                Reply::NetworkDown => Reply::NetworkDown,
            }),
            None => None,
        };

        match reply {
            Some(Reply::Raw(raw)) => Ok(raw),
            Some(Reply::NetworkDown) => Err(ApiError::Network("connection refused".into())),
            None if request.method == Method::Get => Ok(RawResponse {
                status: 200,
                body: "[]".into(),
            }),
            None => Ok(RawResponse {
                status: 204,
                body: String::new(),
            }),
        }
    }
}

#[derive(Clone, Default)]
pub struct MockSession {
    token: Option<String>,
    ended: Rc<Cell<bool>>,
}

impl MockSession {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
            ended: Rc::default(),
        }
    }

    pub fn ended(&self) -> bool {
        self.ended.get()
    }
}

impl Session for MockSession {
    fn token(&self) -> Option<String> {
        self.token.clone()
    }

    fn end(&self) {
        self.ended.set(true);
    }
}

pub type MockClient = ApiClient<MockTransport, MockSession>;

/// Client over shared handles, so the test can inspect them afterwards
pub fn client(transport: &MockTransport, session: &MockSession) -> MockClient {
    ApiClient::new("http://test/api", transport.clone(), session.clone())
}
