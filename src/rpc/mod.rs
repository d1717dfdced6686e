//! # RPC Surface
//!
//! Machine-to-machine polling of a single named component without HTTP
//! overhead. This module ships the service methods and their
//! request/response shapes only; the transport and codec belong to the
//! host process, exactly as the HTTP server hosts the web routes.

mod service;

pub use service::{RpcRequest, RpcResponse, StatusRpc};
