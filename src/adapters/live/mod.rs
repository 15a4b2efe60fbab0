//! Live adapters for real external interactions.

pub mod rpc;
