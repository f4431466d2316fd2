use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde_json::Value;

use crate::error::KbError;

/// Transport seam: one GET, one typed outcome.
///
/// A single attempt per call; no retries, no timeout enforcement, no
/// cancellation. Callers that need resilience re-invoke.
pub trait FetchGateway: Send + Sync {
    fn get_json(&self, url: &str) -> Result<Value, KbError>;
}

impl<G: FetchGateway + ?Sized> FetchGateway for &G {
    fn get_json(&self, url: &str) -> Result<Value, KbError> {
        (**self).get_json(url)
    }
}

#[derive(Clone)]
pub struct HttpFetchGateway {
    client: Client,
}

impl HttpFetchGateway {
    pub fn new() -> Result<Self, KbError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("kb-client/{}", env!("CARGO_PKG_VERSION")))
                .map_err(|err| KbError::Http(err.to_string()))?,
        );
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|err| KbError::Http(err.to_string()))?;
        Ok(Self { client })
    }
}

impl FetchGateway for HttpFetchGateway {
    fn get_json(&self, url: &str) -> Result<Value, KbError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|err| KbError::Http(err.to_string()))?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .unwrap_or_else(|_| "knowledge base request failed".to_string());
            return Err(KbError::Status { status, message });
        }
        let body = response
            .text()
            .map_err(|err| KbError::Http(err.to_string()))?;
        serde_json::from_str(&body).map_err(|err| KbError::Decode(err.to_string()))
    }
}
