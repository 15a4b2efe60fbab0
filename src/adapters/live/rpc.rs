//! Live adapter for the `RpcTransport` port using `reqwest`.

use std::error::Error;

use hyper::ext::ReasonPhrase;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;

use crate::ports::rpc::{RpcFuture, RpcRequest, RpcResponse, RpcTransport};

/// Live transport that sends requests over HTTP.
pub struct LiveRpcTransport {
    client: Client,
}

impl LiveRpcTransport {
    /// Creates a new live transport with default client settings.
    #[must_use]
    pub fn new() -> Self {
        Self { client: Client::new() }
    }
}

impl Default for LiveRpcTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl RpcTransport for LiveRpcTransport {
    fn call(&self, request: &RpcRequest) -> RpcFuture<'_> {
        let request = request.clone();

        Box::pin(async move {
            let response = self
                .client
                .post(&request.url)
                .header("apikey", &request.secret_key)
                .header(AUTHORIZATION, format!("Bearer {}", request.secret_key))
                .header(CONTENT_TYPE, "application/json")
                .body(request.body)
                .send()
                .await
                .map_err(|e| -> Box<dyn Error + Send + Sync> { describe(&e).into() })?;

            let status = response.status();
            let status_text = status_text(&response);
            let body = response
                .text()
                .await
                .map_err(|e| -> Box<dyn Error + Send + Sync> { describe(&e).into() })?;

            Ok(RpcResponse {
                status: status.as_u16(),
                status_text,
                body,
            })
        })
    }
}

/// Reason phrase as sent by the server.
///
/// hyper only keeps the phrase when it differs from the canonical one, so the
/// canonical phrase is the fallback.
fn status_text(response: &reqwest::Response) -> String {
    match response.extensions().get::<ReasonPhrase>() {
        Some(reason) => String::from_utf8_lossy(reason.as_bytes()).into_owned(),
        None => response.status().canonical_reason().unwrap_or_default().to_string(),
    }
}

/// Flattens an error and its sources into one line.
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
