mod data;
mod error;
mod forecast_api_client;

pub use data::{ApiErrorBody, DailySeries, Forecast, HourlySeries};
pub use error::Error;
pub use forecast_api_client::{ForecastApiClient, ForecastApiClientBuilder, ForecastParams};
