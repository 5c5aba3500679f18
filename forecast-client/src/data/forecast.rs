use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A successful forecast response. `hourly` and `daily` are present only
/// when the matching variables were requested.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Forecast {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub generationtime_ms: f64,
    #[serde(default)]
    pub utc_offset_seconds: i64,
    pub timezone: Option<String>,
    pub timezone_abbreviation: Option<String>,
    pub elevation: Option<f64>,
    pub hourly_units: Option<HashMap<String, String>>,
    pub hourly: Option<HourlySeries>,
    pub daily_units: Option<HashMap<String, String>>,
    pub daily: Option<DailySeries>,
}

/// Hour-resolution series. Every present array has the same length as
/// `time`.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct HourlySeries {
    pub time: Vec<String>,
    pub temperature_2m: Option<Vec<f64>>,
    pub relativehumidity_2m: Option<Vec<f64>>,
    pub dewpoint_2m: Option<Vec<f64>>,
    pub apparent_temperature: Option<Vec<f64>>,
    pub precipitation: Option<Vec<f64>>,
    pub windspeed_10m: Option<Vec<f64>>,
    pub winddirection_10m: Option<Vec<f64>>,
}

/// Day-resolution series. Every present array has the same length as
/// `time`.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct DailySeries {
    pub time: Vec<String>,
    pub temperature_2m_max: Option<Vec<f64>>,
    pub temperature_2m_min: Option<Vec<f64>>,
    pub precipitation_sum: Option<Vec<f64>>,
    pub windspeed_10m_max: Option<Vec<f64>>,
}

/// Body the API answers with when it rejects a request.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ApiErrorBody {
    pub error: bool,
    pub reason: String,
}
