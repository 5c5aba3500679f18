use crate::data::{ApiRequest, ApiResponse};
use crate::error::Error;
use log::debug;
use reqwest::blocking::Client;
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Builder used to build a Probe instance.
#[derive(Debug, Clone, Default)]
pub struct ProbeBuilder {
    timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl ProbeBuilder {
    /// Create a new ProbeBuilder instance.
    pub fn new() -> Self {
        Self {
            timeout: None,
            http_client: None,
        }
    }

    /// Use the given per-request timeout instead of the 2 second default.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use the given pre-configured blocking reqwest client.
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Consume the builder and create a Probe instance using all of the
    /// previously configured values or their defaults.
    pub fn build(mut self) -> Probe {
        Probe {
            http: self.http_client.take().unwrap_or_default(),
            timeout: self.timeout.take().unwrap_or(DEFAULT_TIMEOUT),
        }
    }
}

/// Synchronous request performer: one blocking GET per call, with a fixed
/// timeout. A timed-out request is reported through the response's timeout
/// flag; any other transport failure propagates to the caller.
#[derive(Debug, Clone)]
pub struct Probe {
    http: Client,
    timeout: Duration,
}

impl Probe {
    /// Create a Probe with the default reqwest client and timeout.
    pub fn new() -> Self {
        Probe {
            http: Client::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Perform the given request and classify the outcome.
    ///
    /// # Returns
    /// `Ok` with either a completed response (status code plus JSON-decoded
    /// body) or a response whose timeout flag is set. `Err` for any other
    /// transport failure, and for a body that is not valid JSON.
    pub fn perform(&self, request: &ApiRequest) -> Result<ApiResponse, Error> {
        let url = request.full_url();
        debug!("GET {}", url);

        let response = match self.http.get(&url).timeout(self.timeout).send() {
            Ok(response) => response,
            Err(e) if e.is_timeout() => return Ok(ApiResponse::timed_out()),
            Err(e) => return Err(e.into()),
        };

        let status = response.status().as_u16();
        let bytes = match response.bytes() {
            Ok(bytes) => bytes,
            Err(e) if e.is_timeout() => return Ok(ApiResponse::timed_out()),
            Err(e) => return Err(e.into()),
        };

        Ok(ApiResponse::completed(status, serde_json::from_slice(&bytes)?))
    }
}

impl Default for Probe {
    fn default() -> Self {
        Self::new()
    }
}
