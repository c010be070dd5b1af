//! HTTP client for the BEDCA query endpoint.
//!
//! Every query is a POST of an XML document to a single URL; the response is
//! XML as well. Requests are awaited one at a time.

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

use super::error::BedcaError;

/// Public BEDCA query endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.bedca.net/bdpub/procquery.php";

#[derive(Debug, Clone)]
pub struct BedcaClient {
    http: reqwest::Client,
    base_url: String,
}

impl BedcaClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Posts `body` as `text/xml` and returns the response text.
    ///
    /// Anything other than `200 OK` is an error; there are no retries.
    pub async fn query(&self, body: String) -> Result<String, BedcaError> {
        let response = self
            .http
            .post(&self.base_url)
            .header(CONTENT_TYPE, "text/xml")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(BedcaError::UnexpectedStatus(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}
