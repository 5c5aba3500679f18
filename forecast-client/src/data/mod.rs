mod forecast;

pub use forecast::{ApiErrorBody, DailySeries, Forecast, HourlySeries};
