//! Common Test Utilities
//!
//! Shared helpers used across the unit and integration suites: a scripted
//! stub JSON-RPC endpoint and standardised RPC test configuration.


pub use rpc_helpers::{
    method_router, spawn_stub_endpoint, test_rpc_config, EndpointScript, StubEndpoint,
};
