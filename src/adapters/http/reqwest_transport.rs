use std::time::Duration;
use async_trait::async_trait;
use reqwest::Client;

use crate::ports::http::{ApiRequest, ApiResponse, HttpMethod, HttpTransport, TransportError};

/// `HttpTransport` backed by a reqwest client
///
/// Without an explicit timeout the reqwest defaults apply (no overall
/// request timeout).
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, TransportError> {
        Self::with_timeout(None)
    }

    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| TransportError::Setup(e.to_string()))?;

        Ok(Self { http })
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportError::Timeout(e.to_string())
        } else if e.is_connect() {
            TransportError::Connect(e.to_string())
        } else {
            TransportError::Request(e.to_string())
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let mut req = match request.method {
            HttpMethod::Get => self.http.get(&request.url),
            HttpMethod::Post => self.http.post(&request.url),
        };

        if !request.query.is_empty() {
            req = req.query(&request.query);
        }
        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        tracing::debug!(method = %request.method, url = %request.url, "Sending request");

        let response = req.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        tracing::debug!(status, bytes = body.len(), url = %request.url, "Received response");

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_creation() {
        assert!(ReqwestTransport::new().is_ok());
    }

    #[test]
    fn test_transport_with_timeout() {
        assert!(ReqwestTransport::with_timeout(Some(Duration::from_secs(5))).is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let transport = ReqwestTransport::with_timeout(Some(Duration::from_secs(2))).unwrap();
        // Port 9 (discard) on localhost is closed in test environments
        let request = ApiRequest::new(HttpMethod::Get, "http://127.0.0.1:9/public/price")
            .with_query("address", "ADDR1");

        let result = transport.send(request).await;
        assert!(result.is_err());
    }
}
