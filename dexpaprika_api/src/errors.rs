//! Error types for the API client.

use crate::endpoint::Endpoint;

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request URL could not be assembled from the base URL and path.
    #[error("Invalid URL for {endpoint}: {source}")]
    InvalidUrl {
        endpoint: Endpoint,
        source: url::ParseError,
    },
    /// The request could not be sent or the response body could not be read.
    /// The message carries the whole cause chain down to the I/O fault.
    #[error("{}", transport_message(.endpoint, .source))]
    Transport {
        endpoint: Endpoint,
        source: reqwest::Error,
    },
    /// The API answered with anything other than 200, with a body snippet.
    #[error("{}", status_message(.endpoint, .status))]
    HttpStatus {
        endpoint: Endpoint,
        status: u16,
        body: String,
    },
    /// The response body was not valid JSON.
    #[error("Error decoding {endpoint} from DexPaprika: {source}")]
    Decode {
        endpoint: Endpoint,
        source: serde_json::Error,
    },
    /// A typed request parameter was given a value outside its accepted set.
    #[error("Invalid {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
}

impl Error {
    /// HTTP status code of a non-200 response, if that is what failed.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The endpoint the failing request was aimed at.
    pub fn endpoint(&self) -> Option<Endpoint> {
        match self {
            Error::InvalidUrl { endpoint, .. }
            | Error::Transport { endpoint, .. }
            | Error::HttpStatus { endpoint, .. }
            | Error::Decode { endpoint, .. } => Some(*endpoint),
            Error::InvalidValue { .. } => None,
        }
    }

    pub(crate) fn invalid_value(field: &'static str, value: &str) -> Self {
        Error::InvalidValue {
            field,
            value: value.to_string(),
        }
    }
}

fn status_message(endpoint: &Endpoint, status: &u16) -> String {
    match endpoint {
        Endpoint::Search => format!("Failed to search: {}", status),
        _ => format!("Failed to fetch {}: {}", endpoint, status),
    }
}

fn transport_message(endpoint: &Endpoint, source: &reqwest::Error) -> String {
    let cause = error_chain(source);
    match endpoint {
        Endpoint::Search => format!("Error searching DexPaprika: {}", cause),
        _ => format!("Error fetching {} from DexPaprika: {}", endpoint, cause),
    }
}

/// Joins an error and its `source()` chain with `": "`, skipping a cause whose
/// text repeats the one before it.
pub(crate) fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut parts = vec![err.to_string()];
    let mut next = err.source();
    while let Some(cause) = next {
        let text = cause.to_string();
        if parts.last() != Some(&text) {
            parts.push(text);
        }
        next = cause.source();
    }
    parts.join(": ")
}
