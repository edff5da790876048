use std::fmt;
use thiserror::Error;

/// Failures caused by the hosting environment rather than the client.
///
/// These surface as internal errors: the integration between the web server
/// and this crate is broken and retrying the request will not help.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("missing server metadata key \"{0}\"")]
    MissingMetadata(&'static str),
    #[error(
        "trust_forwarded_proto requires SchemePolicy::FromMetadata; the forced https scheme never consults forwarded headers"
    )]
    ForwardedProtoRequiresMetadataScheme,
}

impl ConfigurationError {
    pub fn status_code(&self) -> u16 {
        500
    }
}

/// Mapping a parameter lookup was performed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterLocation {
    Query,
    Form,
    Header,
}

impl fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ParameterLocation::Query => "query parameter",
            ParameterLocation::Form => "form parameter",
            ParameterLocation::Header => "header",
        };
        f.write_str(label)
    }
}

/// A required parameter or header was absent from the request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("missing {location} \"{key}\"")]
pub struct MissingParameterError {
    pub location: ParameterLocation,
    pub key: String,
}

impl MissingParameterError {
    pub fn new(location: ParameterLocation, key: impl Into<String>) -> Self {
        Self {
            location,
            key: key.into(),
        }
    }

    pub fn status_code(&self) -> u16 {
        400
    }
}

/// Any error produced while reading a request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    MissingParameter(#[from] MissingParameterError),
}

impl RequestError {
    pub fn status_code(&self) -> u16 {
        match self {
            RequestError::Configuration(error) => error.status_code(),
            RequestError::MissingParameter(error) => error.status_code(),
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self, RequestError::MissingParameter(_))
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
