//! JSON-over-HTTP client for the ERP backend.
//!
//! Every request goes through [`ApiClient`]: it prefixes the configured base,
//! attaches the bearer token, encodes JSON bodies and turns non-2xx answers
//! into [`ApiError`]. A 401 from any endpoint ends the session.

pub mod client;
pub mod error;
pub mod session;
pub mod transport;

pub use client::{ApiClient, BrowserClient};
pub use error::ApiError;
pub use session::{AnonymousSession, BrowserSession, Session, LOGIN_ROUTE};
pub use transport::{ApiRequest, GlooTransport, HttpTransport, Method, RawResponse};

#[cfg(test)]
pub(crate) mod testing;
