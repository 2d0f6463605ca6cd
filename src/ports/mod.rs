//! Ports Layer - Trait definitions for external dependencies
//!
//! Following hexagonal architecture, the client talks to the network only
//! through the `HttpTransport` trait defined here. Adapters provide the
//! reqwest implementation; `mocks` provides an in-memory one.

pub mod http;
pub mod mocks;

pub use http::{
    ApiRequest, ApiResponse, HttpMethod, HttpTransport, TransportError, UnknownMethod,
};
pub use mocks::MockTransport;
