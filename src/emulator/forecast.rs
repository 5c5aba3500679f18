use super::{error_body, parse_query};
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{json, Map, Value};
use std::f64::consts::PI;
use std::time::Instant;

/// Hourly weather variables the emulator knows how to synthesize.
pub const HOURLY_VARIABLES: &[&str] = &[
    "temperature_2m",
    "relativehumidity_2m",
    "dewpoint_2m",
    "apparent_temperature",
    "precipitation",
    "rain",
    "snowfall",
    "surface_pressure",
    "cloudcover",
    "windspeed_10m",
    "winddirection_10m",
];

/// Daily weather variables the emulator knows how to synthesize.
pub const DAILY_VARIABLES: &[&str] = &[
    "temperature_2m_max",
    "temperature_2m_min",
    "apparent_temperature_max",
    "apparent_temperature_min",
    "precipitation_sum",
    "rain_sum",
    "windspeed_10m_max",
];

const DEFAULT_FORECAST_DAYS: u32 = 7;
const MAX_FORECAST_DAYS: u32 = 16;

lazy_static! {
    static ref TIMEZONE_REGEX: Regex = Regex::new(r"^[A-Za-z_]+(?:/[A-Za-z0-9_+\-]+)?$").unwrap();
}

#[derive(Debug)]
struct ForecastQuery {
    latitude: f64,
    longitude: f64,
    hourly: Vec<String>,
    daily: Vec<String>,
    forecast_days: u32,
    timezone: String,
}

/// Answer a forecast request: 400 with the API's error body shape for
/// invalid parameters, 200 with a synthesized dataset otherwise.
pub(crate) fn respond(query: Option<&str>) -> (u16, Value) {
    let started = Instant::now();

    match ForecastQuery::parse(query.unwrap_or("")) {
        Ok(query) => (200, synthesize(&query, started)),
        Err(reason) => (400, error_body(reason)),
    }
}

impl ForecastQuery {
    fn parse(query: &str) -> Result<Self, String> {
        let mut latitude = None;
        let mut longitude = None;
        let mut hourly = Vec::new();
        let mut daily = Vec::new();
        let mut forecast_days = DEFAULT_FORECAST_DAYS;
        let mut timezone = String::from("GMT");

        for (key, value) in &parse_query(query) {
            match key.as_str() {
                "latitude" => latitude = Some(parse_number(key, value)?),
                "longitude" => longitude = Some(parse_number(key, value)?),
                "hourly" => hourly.extend(value.split(',').map(String::from)),
                "daily" => daily.extend(value.split(',').map(String::from)),
                "forecast_days" => {
                    forecast_days = value
                        .parse()
                        .map_err(|_| format!("Forecast days is invalid. Given: {}.", value))?;
                }
                "timezone" => timezone = value.clone(),
                // The live API silently ignores parameters it does not know.
                _ => {}
            }
        }

        let latitude =
            latitude.ok_or_else(|| String::from("Parameter 'latitude' and 'longitude' are required"))?;
        let longitude =
            longitude.ok_or_else(|| String::from("Parameter 'latitude' and 'longitude' are required"))?;

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(format!(
                "Latitude must be in range of -90 to 90°. Given: {}.",
                latitude
            ));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(format!(
                "Longitude must be in range of -180 to 180°. Given: {}.",
                longitude
            ));
        }

        for variable in &hourly {
            if !HOURLY_VARIABLES.contains(&variable.as_str()) {
                return Err(format!(
                    "Cannot initialize WeatherVariable from invalid String value {} for key hourly",
                    variable
                ));
            }
        }
        for variable in &daily {
            if !DAILY_VARIABLES.contains(&variable.as_str()) {
                return Err(format!(
                    "Cannot initialize DailyWeatherVariable from invalid String value {} for key daily",
                    variable
                ));
            }
        }

        if forecast_days > MAX_FORECAST_DAYS {
            return Err(format!(
                "Forecast days is invalid. Allowed range 0 to {}.",
                MAX_FORECAST_DAYS
            ));
        }

        if timezone != "auto" && !TIMEZONE_REGEX.is_match(&timezone) {
            return Err(format!("Invalid timezone. Given: {}.", timezone));
        }

        Ok(Self {
            latitude,
            longitude,
            hourly,
            daily,
            forecast_days,
            timezone,
        })
    }
}

fn parse_number(key: &str, value: &str) -> Result<f64, String> {
    value.parse().map_err(|_| {
        format!(
            "Value of type 'Float' required for key '{}'. Given: {}.",
            key, value
        )
    })
}

fn synthesize(query: &ForecastQuery, started: Instant) -> Value {
    let hours = query.forecast_days * 24;

    let mut body = Map::new();
    body.insert("latitude".into(), json!(query.latitude));
    body.insert("longitude".into(), json!(query.longitude));
    body.insert(
        "generationtime_ms".into(),
        json!(started.elapsed().as_secs_f64() * 1000.0),
    );
    body.insert("utc_offset_seconds".into(), json!(0));
    body.insert("timezone".into(), json!(query.timezone));
    body.insert(
        "timezone_abbreviation".into(),
        json!(timezone_abbreviation(&query.timezone)),
    );
    body.insert("elevation".into(), json!(12.0));

    if !query.hourly.is_empty() {
        let mut units = Map::new();
        let mut series = Map::new();
        units.insert("time".into(), json!("iso8601"));
        series.insert(
            "time".into(),
            Value::Array((0..hours).map(hourly_timestamp).collect()),
        );
        for variable in &query.hourly {
            units.insert(variable.clone(), json!(unit_for(variable)));
            series.insert(
                variable.clone(),
                Value::Array((0..hours).map(|step| sample(variable, step)).collect()),
            );
        }
        body.insert("hourly_units".into(), Value::Object(units));
        body.insert("hourly".into(), Value::Object(series));
    }

    if !query.daily.is_empty() {
        let mut units = Map::new();
        let mut series = Map::new();
        units.insert("time".into(), json!("iso8601"));
        series.insert(
            "time".into(),
            Value::Array((0..query.forecast_days).map(daily_date).collect()),
        );
        for variable in &query.daily {
            units.insert(variable.clone(), json!(unit_for(variable)));
            series.insert(
                variable.clone(),
                Value::Array(
                    (0..query.forecast_days)
                        .map(|day| sample(variable, day))
                        .collect(),
                ),
            );
        }
        body.insert("daily_units".into(), Value::Object(units));
        body.insert("daily".into(), Value::Object(series));
    }

    Value::Object(body)
}

// The time grid starts from a fixed day, not the wall clock; callers
// assert on array lengths, never on dates.
fn hourly_timestamp(step: u32) -> Value {
    json!(format!("2024-07-{:02}T{:02}:00", 1 + step / 24, step % 24))
}

fn daily_date(day: u32) -> Value {
    json!(format!("2024-07-{:02}", 1 + day))
}

fn sample(variable: &str, step: u32) -> Value {
    let phase = f64::from(step % 24) * PI / 12.0;
    let value = match variable {
        v if v.starts_with("temperature") || v.starts_with("apparent_temperature") => {
            15.0 + 8.0 * phase.sin()
        }
        "relativehumidity_2m" => 70.0 - 15.0 * phase.sin(),
        "dewpoint_2m" => 9.0 + 3.0 * phase.sin(),
        "surface_pressure" => 1013.0 + 2.0 * phase.cos(),
        "cloudcover" => 50.0 + 50.0 * phase.cos(),
        "windspeed_10m" | "windspeed_10m_max" => 12.0 + 4.0 * phase.cos(),
        "winddirection_10m" => f64::from((step * 15) % 360),
        _ => 0.0,
    };

    json!((value * 10.0).round() / 10.0)
}

fn unit_for(variable: &str) -> &'static str {
    match variable {
        v if v.starts_with("temperature")
            || v.starts_with("apparent_temperature")
            || v.starts_with("dewpoint") =>
        {
            "°C"
        }
        "relativehumidity_2m" | "cloudcover" => "%",
        "surface_pressure" => "hPa",
        v if v.starts_with("windspeed") => "km/h",
        "winddirection_10m" => "°",
        _ => "mm",
    }
}

fn timezone_abbreviation(timezone: &str) -> &'static str {
    if timezone == "UTC" {
        "UTC"
    } else {
        "GMT"
    }
}
