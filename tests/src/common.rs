use meteoprobe::{emulator, init_test_logger, ApiRequest, QueryParams};
use serde_json::Value;

pub const LIVE_URL: &str = "https://api.open-meteo.com/v1/forecast";

pub fn setup() {
    init_test_logger();
}

/// A forecast request against the emulator.
pub fn forecast_request(params: QueryParams) -> ApiRequest {
    ApiRequest::new(emulator::forecast_url(), params)
}

pub fn array_len(content: &Value, group: &str, field: &str) -> usize {
    content[group][field]
        .as_array()
        .map(|values| values.len())
        .unwrap_or(0)
}
