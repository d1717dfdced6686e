//! # Service Layer
//!
//! Transport-agnostic services consumed by the HTTP handlers and the RPC
//! surface alike.

pub mod status;
