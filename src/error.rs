use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    ReqwestError(reqwest::Error),
    HyperError(hyper::Error),
    JsonError(serde_json::Error),
    ParseUriError,
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::ReqwestError(e) => write!(f, "reqwest error: {}", e),
            Error::HyperError(e) => write!(f, "Hyper error: {}", e),
            Error::JsonError(e) => write!(f, "JSON error: {}", e),
            Error::ParseUriError => write!(f, "Parse URI Error"),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::ReqwestError(e)
    }
}

impl From<hyper::Error> for Error {
    fn from(e: hyper::Error) -> Self {
        Error::HyperError(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::JsonError(e)
    }
}
