use hyper::{
    header::InvalidHeaderValue, http::Error as HttpError, Error as HyperError, StatusCode,
};
use serde::Deserialize;
use serde_json::Error as SerdeError;
use std::{
    error::Error as StdError,
    fmt::{Display, Formatter, Result as FmtResult},
};
use url::ParseError;

use crate::response::Response;

/// Error document returned by the API alongside a non-2xx status.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error_code: String,
    #[serde(default)]
    pub error_summary: String,
    pub error_link: Option<String>,
    pub error_id: Option<String>,
    #[serde(default)]
    pub error_causes: Vec<ApiErrorCause>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorCause {
    #[serde(default)]
    pub error_summary: String,
}

#[derive(Debug)]
pub enum Error {
    BuildingRequest(HttpError),
    InvalidHeader(InvalidHeaderValue),
    Url(ParseError),
    Request(HyperError),
    Parsing(SerdeError),
    APIError(Response, Option<ApiErrorBody>),
    MissingEnv(&'static str),
}

impl Error {
    /// Metadata of the failed response, if the failure came from the API.
    pub fn response(&self) -> Option<&Response> {
        match self {
            Error::APIError(response, _) => Some(response),
            _ => None,
        }
    }

    /// Status code of the failed response, if the failure came from the API.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::APIError(response, _) => Some(response.status),
            _ => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Error::APIError(response, Some(body)) => write!(
                f,
                "API Error - {} ({}: {})",
                response.status, body.error_code, body.error_summary
            ),
            Error::APIError(response, None) => write!(f, "API Error - {}", response.status),
            Error::BuildingRequest(err) => write!(f, "Building Request Error - {}", err),
            Error::InvalidHeader(err) => write!(f, "Invalid Header Error - {}", err),
            Error::Url(err) => write!(f, "URL Error - {}", err),
            Error::Parsing(err) => write!(f, "Parsing Error - {}", err),
            Error::Request(err) => write!(f, "Request Error - {}", err),
            Error::MissingEnv(key) => write!(f, "Expected {} in the environment", key),
        }
    }
}

impl From<HttpError> for Error {
    fn from(err: HttpError) -> Self {
        Error::BuildingRequest(err)
    }
}

impl From<InvalidHeaderValue> for Error {
    fn from(err: InvalidHeaderValue) -> Self {
        Error::InvalidHeader(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Url(err)
    }
}

impl From<HyperError> for Error {
    fn from(err: HyperError) -> Self {
        Error::Request(err)
    }
}

impl From<SerdeError> for Error {
    fn from(err: SerdeError) -> Self {
        Error::Parsing(err)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::BuildingRequest(err) => Some(err),
            Error::InvalidHeader(err) => Some(err),
            Error::Url(err) => Some(err),
            Error::Request(err) => Some(err),
            Error::Parsing(err) => Some(err),
            Error::APIError(..) | Error::MissingEnv(_) => None,
        }
    }
}
