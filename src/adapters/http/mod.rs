//! HTTP Adapter
//!
//! Production implementation of the `HttpTransport` port using reqwest.

mod reqwest_transport;

pub use reqwest_transport::ReqwestTransport;
