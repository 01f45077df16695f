use reqwest::blocking::Client;

use super::{
    decode::CONTENT_ENCODING_HEADER,
    error::{Result, ReviewError},
};

const USER_AGENT: &str = concat!("conf-burndown/", env!("CARGO_PKG_VERSION"));

/// Undecoded HTTP response.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub url: String,
    pub status: u16,
    /// Value of the `X-FYI-Content-Encoding` header, if present.
    pub content_encoding: Option<String>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Anonymous GET access to the review service.
pub trait Transport: Sync {
    fn get(&self, url: &str) -> Result<RawResponse>;
}

/// Blocking HTTP transport.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ReviewError::Http {
                url: String::new(),
                message: format!("failed to create HTTP client: {e}"),
            })?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<RawResponse> {
        let http_error = |e: reqwest::Error| ReviewError::Http {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(url).send().map_err(http_error)?;
        let status = response.status().as_u16();
        let content_encoding = response
            .headers()
            .get(CONTENT_ENCODING_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().map_err(http_error)?.to_vec();

        Ok(RawResponse {
            url: url.to_string(),
            status,
            content_encoding,
            body,
        })
    }
}
