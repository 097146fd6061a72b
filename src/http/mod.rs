//! HTTP transport for the plugin protocol

pub mod handlers;
