use crate::query::QueryParams;
use serde_json::Value;

/// One request against an HTTP API: a base URL plus the query parameters
/// to append to it.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub url: String,
    pub params: QueryParams,
}

impl ApiRequest {
    pub fn new<S: Into<String>>(url: S, params: QueryParams) -> Self {
        Self {
            url: url.into(),
            params,
        }
    }

    /// Serialize into the final URL. An empty parameter set yields the base
    /// URL unchanged; otherwise `?k1=v1&k2=v2` is appended. Values are not
    /// percent-encoded, so list values keep their literal commas.
    pub fn full_url(&self) -> String {
        if self.params.is_empty() {
            self.url.clone()
        } else {
            format!("{}?{}", self.url, self.params.to_query_string())
        }
    }
}

/// Outcome of a performed request. Either the request timed out, or it
/// completed with a status code and a parsed JSON body; never both.
#[derive(Debug, Clone, Default)]
pub struct ApiResponse {
    pub status: Option<u16>,
    pub content: Option<Value>,
    pub timeout: bool,
}

impl ApiResponse {
    pub(crate) fn timed_out() -> Self {
        Self {
            status: None,
            content: None,
            timeout: true,
        }
    }

    pub(crate) fn completed(status: u16, content: Value) -> Self {
        Self {
            status: Some(status),
            content: Some(content),
            timeout: false,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == Some(200)
    }
}
