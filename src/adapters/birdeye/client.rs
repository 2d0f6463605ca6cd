//! Birdeye API Client
//!
//! Authenticated requests to the Birdeye public API and translation of the
//! JSON bodies into `PriceInfo` and `TokenOverview`.

use std::collections::HashMap;
use serde::de::DeserializeOwned;

use crate::adapters::http::ReqwestTransport;
use crate::domain::{PriceInfo, TokenOverview};
use crate::ports::http::{ApiRequest, ApiResponse, HttpMethod, HttpTransport, TransportError};

use super::config::BirdeyeConfig;
use super::error::{BirdeyeError, Endpoint, ResponseFault};
use super::types::{PriceResponse, TokenOverviewResponse};

/// Client for the Birdeye market data API
///
/// Holds read-only configuration and a transport. Every call is an
/// independent request/response cycle; batch calls run one request at a time.
#[derive(Debug, Clone)]
pub struct BirdeyeClient<T: HttpTransport = ReqwestTransport> {
    config: BirdeyeConfig,
    transport: T,
}

impl BirdeyeClient<ReqwestTransport> {
    /// Create a client that talks to the network through reqwest
    pub fn new(config: BirdeyeConfig) -> Result<Self, BirdeyeError> {
        let transport = ReqwestTransport::with_timeout(config.timeout)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: HttpTransport> BirdeyeClient<T> {
    /// Create a client over any transport
    pub fn with_transport(config: BirdeyeConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &BirdeyeConfig {
        &self.config
    }

    fn headers(&self) -> [(&'static str, &str); 3] {
        [
            ("accept", "application/json"),
            ("x-chain", self.config.chain.as_str()),
            ("X-API-KEY", self.config.api_key.as_str()),
        ]
    }

    /// Send an authenticated request with the given verb
    pub async fn dispatch(
        &self,
        method: HttpMethod,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<ApiResponse, TransportError> {
        let mut request = ApiRequest::new(method, url);
        for (key, value) in query {
            request = request.with_query(*key, *value);
        }
        for (name, value) in self.headers() {
            request = request.with_header(name, value);
        }

        self.transport.send(request).await
    }

    /// Like `dispatch`, with the verb given by name
    ///
    /// Anything other than GET or POST (case-insensitive) fails with
    /// `UnsupportedMethod` before a request is sent.
    pub async fn dispatch_named(
        &self,
        method: &str,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<ApiResponse, BirdeyeError> {
        let method: HttpMethod = method.parse().map_err(|_| BirdeyeError::UnsupportedMethod {
            method: method.to_string(),
            url: url.to_string(),
        })?;

        Ok(self.dispatch(method, url, query).await?)
    }

    /// Fetch current prices for every address
    ///
    /// Addresses are queried one after another. The first failure aborts the
    /// whole batch with `InvalidResponse` for that address.
    pub async fn fetch_prices<S: AsRef<str>>(
        &self,
        token_addresses: &[S],
    ) -> Result<HashMap<String, PriceInfo>, BirdeyeError> {
        if token_addresses.is_empty() {
            return Err(BirdeyeError::InvalidInput("No tokens provided.".to_string()));
        }

        let mut prices = HashMap::with_capacity(token_addresses.len());
        for address in token_addresses {
            let address = address.as_ref();
            let price = self.fetch_price(address).await?;
            prices.insert(address.to_string(), price);
        }

        Ok(prices)
    }

    /// Fetch the current price of a single token
    pub async fn fetch_price(&self, address: &str) -> Result<PriceInfo, BirdeyeError> {
        let url = self.config.price_url();
        let response: PriceResponse = self.get_json(Endpoint::Price, &url, address).await?;
        Ok(response.into())
    }

    /// Fetch the market overview of a single token
    pub async fn fetch_token_overview(&self, address: &str) -> Result<TokenOverview, BirdeyeError> {
        let url = self.config.token_overview_url();
        let response: TokenOverviewResponse =
            self.get_json(Endpoint::TokenOverview, &url, address).await?;
        Ok(response.into())
    }

    /// GET `url?address=<address>` and decode the body
    async fn get_json<D: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        url: &str,
        address: &str,
    ) -> Result<D, BirdeyeError> {
        let response = self
            .dispatch(HttpMethod::Get, url, &[("address", address)])
            .await
            .map_err(|e| BirdeyeError::invalid_response(endpoint, address, e))?;

        decode_body(&response.body)
            .map_err(|fault| BirdeyeError::invalid_response(endpoint, address, fault))
    }
}

/// Status is not consulted: an error page fails here like any other bad body
fn decode_body<D: DeserializeOwned>(body: &str) -> Result<D, ResponseFault> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(ResponseFault::MalformedBody)?;
    serde_json::from_value(value).map_err(ResponseFault::UnexpectedShape)
}
