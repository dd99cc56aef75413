//! Networking modules for the host RPC and push-event protocol.
//!
//! `bridge` owns the raw `uproot` global, `rpc` wraps the four RPC calls in
//! typed async functions, and `events` turns custom events into typed values
//! for the state layer.

pub mod bridge;
pub mod events;
pub mod rpc;
