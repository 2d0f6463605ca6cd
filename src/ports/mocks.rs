use std::sync::{Arc, Mutex};
use async_trait::async_trait;

use super::http::{ApiRequest, ApiResponse, HttpTransport, TransportError};

type Route = (String, String, Result<ApiResponse, TransportError>);

/// Mock transport that records requests and serves canned responses
///
/// Responses are matched on the URL path suffix and the `address` query
/// parameter. Unmatched requests fail with a connection error.
#[derive(Debug, Default, Clone)]
pub struct MockTransport {
    calls: Arc<Mutex<Vec<ApiRequest>>>,
    routes: Arc<Mutex<Vec<Route>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to serve a 200 response with `body`
    pub fn with_body(self, path: &str, address: &str, body: &str) -> Self {
        self.with_result(path, address, Ok(ApiResponse::ok(body)))
    }

    /// Builder method to serve an arbitrary result
    pub fn with_result(
        self,
        path: &str,
        address: &str,
        result: Result<ApiResponse, TransportError>,
    ) -> Self {
        self.routes
            .lock()
            .unwrap()
            .push((path.to_string(), address.to_string(), result));
        self
    }

    /// Get all recorded requests
    pub fn get_calls(&self) -> Vec<ApiRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// Addresses requested so far, in order
    pub fn requested_addresses(&self) -> Vec<String> {
        self.get_calls()
            .iter()
            .filter_map(|r| r.query_param("address").map(str::to_string))
            .collect()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let address = request.query_param("address").unwrap_or_default().to_string();
        let url = request.url.clone();
        self.calls.lock().unwrap().push(request);

        self.routes
            .lock()
            .unwrap()
            .iter()
            .find(|(path, addr, _)| url.ends_with(path.as_str()) && *addr == address)
            .map(|(_, _, result)| result.clone())
            .unwrap_or_else(|| {
                Err(TransportError::Connect(format!(
                    "No response configured for {}?address={}",
                    url, address
                )))
            })
    }
}
