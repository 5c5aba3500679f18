use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    CoordinateOutOfRange(f64, f64),
    UnknownHourlyVariable(String),
    UnknownDailyVariable(String),
    ForecastDaysOutOfRange(u32),
    Api(u16, String),
    Timeout,
    EmptyBody,
    ProbeError(meteoprobe::Error),
    JsonError(serde_json::Error),
}

impl std::error::Error for Error {}

impl From<meteoprobe::Error> for Error {
    fn from(e: meteoprobe::Error) -> Self {
        Error::ProbeError(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::JsonError(e)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::CoordinateOutOfRange(latitude, longitude) => write!(
                f,
                "Coordinates out of range: latitude {}, longitude {}",
                latitude, longitude
            ),
            Error::UnknownHourlyVariable(variable) => {
                write!(f, "Unknown hourly variable: {}", variable)
            }
            Error::UnknownDailyVariable(variable) => {
                write!(f, "Unknown daily variable: {}", variable)
            }
            Error::ForecastDaysOutOfRange(days) => {
                write!(f, "Forecast days out of range: {}", days)
            }
            Error::Api(status, reason) => write!(f, "The API answered {}: {}", status, reason),
            Error::Timeout => write!(f, "The request timed out"),
            Error::EmptyBody => write!(f, "The response carried no body"),
            Error::ProbeError(e) => write!(f, "{}", e),
            Error::JsonError(e) => write!(f, "{}", e),
        }
    }
}
