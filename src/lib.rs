mod data;
mod error;
mod http_client;
mod logger;
mod probe;
mod query;
mod stress;

pub mod emulator;

pub use data::{ApiRequest, ApiResponse};
pub use error::Error;
pub use http_client::{HttpClient, HyperHttpClient};
pub use logger::init_test_logger;
pub use probe::{Probe, ProbeBuilder};
pub use query::{ParamValue, QueryParams};
pub use stress::{StressReport, StressRunner};
