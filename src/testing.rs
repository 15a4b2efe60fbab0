//! Test doubles for the RPC port.

use std::sync::Mutex;

use crate::ports::rpc::{RpcFuture, RpcRequest, RpcResponse, RpcTransport};

/// Records every request and answers with a canned result.
pub struct StubTransport {
    reply: Result<RpcResponse, String>,
    requests: Mutex<Vec<RpcRequest>>,
}

impl StubTransport {
    pub fn responding(status: u16, status_text: &str, body: &str) -> Self {
        Self {
            reply: Ok(RpcResponse {
                status,
                status_text: status_text.to_string(),
                body: body.to_string(),
            }),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self { reply: Err(message.to_string()), requests: Mutex::new(Vec::new()) }
    }

    pub fn requests(&self) -> Vec<RpcRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl RpcTransport for StubTransport {
    fn call(&self, request: &RpcRequest) -> RpcFuture<'_> {
        self.requests.lock().unwrap().push(request.clone());
        let reply = self.reply.clone();
        Box::pin(async move { reply.map_err(Into::into) })
    }
}
