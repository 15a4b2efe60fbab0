//! RPC transport port for calling backend stored procedures.

use std::error::Error;
use std::future::Future;
use std::pin::Pin;

/// Boxed future type alias used by [`RpcTransport`] to keep the trait dyn-compatible.
pub type RpcFuture<'a> =
    Pin<Box<dyn Future<Output = Result<RpcResponse, Box<dyn Error + Send + Sync>>> + Send + 'a>>;

/// A single authenticated POST to a stored procedure.
#[derive(Clone, PartialEq, Eq)]
pub struct RpcRequest {
    /// Full URL of the procedure endpoint.
    pub url: String,
    /// Key sent as the `apikey` header and as the bearer token.
    pub secret_key: String,
    /// Serialized JSON body.
    pub body: String,
}

impl std::fmt::Debug for RpcRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcRequest")
            .field("url", &self.url)
            .field("secret_key", &"<redacted>")
            .field("body", &self.body)
            .finish()
    }
}

/// What the backend answered, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcResponse {
    /// Numeric HTTP status.
    pub status: u16,
    /// Canonical reason phrase, empty when the status has none.
    pub status_text: String,
    /// Raw response body; may be empty.
    pub body: String,
}

impl RpcResponse {
    /// Whether the status is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends RPC requests to the backend.
pub trait RpcTransport: Send + Sync {
    /// Performs the request and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not complete (connection, DNS,
    /// reading the body). A non-success status is not an error here.
    fn call(&self, request: &RpcRequest) -> RpcFuture<'_>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16) -> RpcResponse {
        RpcResponse { status, status_text: String::new(), body: String::new() }
    }

    #[test]
    fn success_range_is_2xx() {
        assert!(response(200).is_success());
        assert!(response(204).is_success());
        assert!(!response(199).is_success());
        assert!(!response(301).is_success());
        assert!(!response(500).is_success());
    }

    #[test]
    fn debug_output_hides_secret() {
        let request = RpcRequest {
            url: "http://localhost/rest/v1/rpc/x".into(),
            secret_key: "hunter2".into(),
            body: "{}".into(),
        };
        assert!(!format!("{request:?}").contains("hunter2"));
    }
}
