//! Port traits defining external boundaries.
//!
//! The only boundary is the backend RPC endpoint. The live implementation
//! lives in `src/adapters/`.

pub mod rpc;

pub use rpc::{RpcFuture, RpcRequest, RpcResponse, RpcTransport};
