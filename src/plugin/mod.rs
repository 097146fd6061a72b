//! JSON-RPC plugin surface
//!
//! The Terraform-side shim forwards every provider SDK call as one JSON-RPC
//! request to `POST /plugin`. [`server`] dispatches those requests onto the
//! provider registry and [`rpc`] shapes the replies.

pub mod rpc;
pub mod server;
