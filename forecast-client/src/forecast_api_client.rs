use crate::data::{ApiErrorBody, Forecast};
use crate::error::Error;
use log::debug;
use meteoprobe::{ApiRequest, ApiResponse, Probe, ProbeBuilder, QueryParams};

const DEFAULT_DOMAIN_NAME: &str = "https://api.open-meteo.com";
const FORECAST_PATH: &str = "/v1/forecast";
const MAX_FORECAST_DAYS: u32 = 16;

/// Hourly variables the API documents; requests are validated against this
/// list before anything is sent.
const HOURLY_VARIABLES: &[&str] = &[
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

/// Daily variables the API documents.
const DAILY_VARIABLES: &[&str] = &[
    "temperature_2m_max",
    "temperature_2m_min",
    "apparent_temperature_max",
    "apparent_temperature_min",
    "precipitation_sum",
    "rain_sum",
    "windspeed_10m_max",
];

/// Builder used to build a ForecastApiClient instance.
#[derive(Debug, Clone, Default)]
pub struct ForecastApiClientBuilder {
    domain_name: Option<String>,
    probe: Option<Probe>,
}

impl ForecastApiClientBuilder {
    /// Create a new ForecastApiClientBuilder instance.
    pub fn new() -> Self {
        Self {
            domain_name: None,
            probe: None,
        }
    }

    /// Use the given domain_name when building a ForecastApiClient instance.
    ///
    /// # Arguments
    /// `domain_name` - a domain name to use when calling the API.
    ///
    /// # Returns
    /// This builder.
    pub fn with_domain_name<T: Into<String>>(mut self, domain_name: T) -> Self {
        self.domain_name = Some(domain_name.into());
        self
    }

    /// Use the given blocking reqwest client when building a
    /// ForecastApiClient instance.
    ///
    /// # Arguments
    /// `client` - a pre-configured blocking reqwest client.
    ///
    /// # Returns
    /// This builder.
    pub fn with_http_client(mut self, client: reqwest::blocking::Client) -> Self {
        self.probe = Some(ProbeBuilder::new().with_http_client(client).build());
        self
    }

    /// Use the given probe when building a ForecastApiClient instance.
    pub fn with_probe(mut self, probe: Probe) -> Self {
        self.probe = Some(probe);
        self
    }

    /// Consume the builder and create a ForecastApiClient instance using all
    /// of the previously configured values or their defaults.
    ///
    /// # Returns
    /// A ForecastApiClient instance.
    pub fn build(mut self) -> ForecastApiClient {
        ForecastApiClient {
            probe: self.probe.take().unwrap_or_default(),
            domain_name: self
                .domain_name
                .take()
                .unwrap_or_else(|| String::from(DEFAULT_DOMAIN_NAME)),
        }
    }
}

/// Struct that represents an Open-Meteo forecast API client.
#[derive(Debug, Clone)]
pub struct ForecastApiClient {
    probe: Probe,
    domain_name: String,
}

impl ForecastApiClient {
    /// Create a ForecastApiClient with the default probe.
    ///
    /// # Returns
    /// A ForecastApiClient.
    pub fn new() -> Self {
        ForecastApiClient {
            probe: Probe::new(),
            domain_name: String::from(DEFAULT_DOMAIN_NAME),
        }
    }

    /// Fetch a weather forecast for the given parameters.
    ///
    /// # Arguments
    /// `params` - coordinates, requested weather variables and forecast
    ///     options. They are validated before any request is made.
    ///
    /// # Returns
    /// The decoded forecast.
    pub fn get_forecast(&self, params: &ForecastParams) -> Result<Forecast, Error> {
        params.check()?;

        let request = self.request_for(params);
        debug!("requesting forecast: {}", request.full_url());

        let response = self.probe.perform(&request)?;
        Self::decode(response)
    }

    /// The raw request `get_forecast` would issue, without client-side
    /// validation. Used where a deliberately invalid request must reach the
    /// server.
    pub fn request_for(&self, params: &ForecastParams) -> ApiRequest {
        ApiRequest::new(
            format!("{}{}", self.domain_name, FORECAST_PATH),
            params.to_query_params(),
        )
    }

    fn decode(response: ApiResponse) -> Result<Forecast, Error> {
        if response.timeout {
            return Err(Error::Timeout);
        }

        let (status, content) = match (response.status, response.content) {
            (Some(status), Some(content)) => (status, content),
            _ => return Err(Error::EmptyBody),
        };

        match status {
            200 => Ok(serde_json::from_value(content)?),
            status => {
                let reason = serde_json::from_value::<ApiErrorBody>(content.clone())
                    .map(|body| body.reason)
                    .unwrap_or_else(|_| content.to_string());

                Err(Error::Api(status, reason))
            }
        }
    }
}

impl Default for ForecastApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Parameters of one forecast request.
#[derive(Debug, Clone)]
pub struct ForecastParams {
    pub latitude: f64,
    pub longitude: f64,
    pub hourly: Vec<String>,
    pub daily: Vec<String>,
    pub forecast_days: Option<u32>,
    pub timezone: Option<String>,
}

impl ForecastParams {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            hourly: Vec::new(),
            daily: Vec::new(),
            forecast_days: None,
            timezone: None,
        }
    }

    /// Request an additional hourly weather variable.
    pub fn with_hourly<T: Into<String>>(mut self, variable: T) -> Self {
        self.hourly.push(variable.into());
        self
    }

    /// Request an additional daily weather variable.
    pub fn with_daily<T: Into<String>>(mut self, variable: T) -> Self {
        self.daily.push(variable.into());
        self
    }

    pub fn with_forecast_days(mut self, days: u32) -> Self {
        self.forecast_days = Some(days);
        self
    }

    pub fn with_timezone<T: Into<String>>(mut self, timezone: T) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    fn check(&self) -> Result<(), Error> {
        if !(-90.0..=90.0).contains(&self.latitude) || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(Error::CoordinateOutOfRange(self.latitude, self.longitude));
        }

        for variable in &self.hourly {
            if !HOURLY_VARIABLES.contains(&variable.as_str()) {
                return Err(Error::UnknownHourlyVariable(variable.clone()));
            }
        }
        for variable in &self.daily {
            if !DAILY_VARIABLES.contains(&variable.as_str()) {
                return Err(Error::UnknownDailyVariable(variable.clone()));
            }
        }

        if let Some(days) = self.forecast_days {
            if days > MAX_FORECAST_DAYS {
                return Err(Error::ForecastDaysOutOfRange(days));
            }
        }

        Ok(())
    }

    fn to_query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.insert("latitude", self.latitude);
        params.insert("longitude", self.longitude);

        if !self.hourly.is_empty() {
            params.insert("hourly", self.hourly.clone());
        }
        if !self.daily.is_empty() {
            params.insert("daily", self.daily.clone());
        }
        if let Some(days) = self.forecast_days {
            params.insert("forecast_days", days);
        }
        if let Some(timezone) = &self.timezone {
            params.insert("timezone", timezone.clone());
        }

        params
    }
}
