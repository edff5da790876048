use crate::authority::Authority;
use crate::builder::RequestContextBuilder;
use crate::constants::{media, meta};
use crate::error::{ConfigurationError, MissingParameterError, ParameterLocation};
use crate::options::ContextOptions;
use crate::params::{self, Parameters};
use crate::path;
use std::fmt;

/// Transport-level view of one inbound request.
///
/// Built once from the metadata the hosting layer collected (CGI-style
/// `SERVER_NAME`, `REQUEST_URI`, `HTTP_*` keys and so on) plus the parsed
/// query string, the parsed form body and the raw body. Nothing is derived
/// at construction; every accessor recomputes from the stored inputs, so the
/// derived values can never drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    server: Parameters,
    query: Parameters,
    form: Parameters,
    body: Option<String>,
    options: ContextOptions,
}

impl RequestContext {
    /// Validates that the hosting layer supplied every required metadata key
    /// and stores the inputs verbatim.
    pub fn new(
        server: Parameters,
        query: Parameters,
        form: Parameters,
        body: Option<String>,
    ) -> Result<Self, ConfigurationError> {
        Self::with_options(ContextOptions::default(), server, query, form, body)
    }

    pub fn with_options(
        options: ContextOptions,
        server: Parameters,
        query: Parameters,
        form: Parameters,
        body: Option<String>,
    ) -> Result<Self, ConfigurationError> {
        options.validate()?;

        if let Some(key) = meta::REQUIRED
            .iter()
            .copied()
            .find(|key| !server.contains_key(*key))
        {
            tracing::error!(key, "hosting environment did not supply required metadata");
            return Err(ConfigurationError::MissingMetadata(key));
        }

        let context = Self {
            server,
            query,
            form,
            body,
            options,
        };

        tracing::debug!(
            method = context.request_method(),
            uri = context.meta(meta::REQUEST_URI),
            script_name = context.meta(meta::SCRIPT_NAME),
            "request context created"
        );

        Ok(context)
    }

    pub fn builder() -> RequestContextBuilder {
        RequestContextBuilder::new()
    }

    /// `scheme://host[:port]` prefix for absolute URLs.
    ///
    /// Under the default [`SchemePolicy::ForceHttps`](crate::SchemePolicy)
    /// this is always `https://` followed by `SERVER_NAME`.
    pub fn authority(&self) -> String {
        Authority::resolve(&self.server, &self.options).to_string()
    }

    /// Absolute URL of the request, query string included.
    pub fn uri(&self) -> String {
        format!("{}{}", self.authority(), self.meta(meta::REQUEST_URI))
    }

    /// Mount path of the application, derived from `SCRIPT_NAME`. Always ends
    /// in `/`.
    pub fn root(&self) -> String {
        path::root(self.meta(meta::SCRIPT_NAME))
    }

    pub fn root_uri(&self) -> String {
        format!("{}{}", self.authority(), self.root())
    }

    pub fn request_method(&self) -> &str {
        self.meta(meta::REQUEST_METHOD)
    }

    pub fn server_name(&self) -> &str {
        self.meta(meta::SERVER_NAME)
    }

    /// Whether the client advertised `text/html` in its `Accept` header.
    pub fn is_browser(&self) -> bool {
        self.server
            .get(meta::HTTP_ACCEPT)
            .is_some_and(|accept| accept.contains(media::TEXT_HTML))
    }

    /// Request path relative to [`root`](Self::root), without the query string.
    pub fn path_info(&self) -> &str {
        path::path_info(self.meta(meta::REQUEST_URI), self.meta(meta::SCRIPT_NAME))
    }

    pub fn query_parameter(&self, key: &str) -> Result<&str, MissingParameterError> {
        Self::required(&self.query, ParameterLocation::Query, key)
    }

    pub fn query_parameter_or<'a>(
        &'a self,
        key: &str,
        default: Option<&'a str>,
    ) -> Option<&'a str> {
        Self::optional(&self.query, ParameterLocation::Query, key, default)
    }

    pub fn post_parameter(&self, key: &str) -> Result<&str, MissingParameterError> {
        Self::required(&self.form, ParameterLocation::Form, key)
    }

    pub fn post_parameter_or<'a>(
        &'a self,
        key: &str,
        default: Option<&'a str>,
    ) -> Option<&'a str> {
        Self::optional(&self.form, ParameterLocation::Form, key, default)
    }

    /// Looks up a raw server metadata key such as `HTTP_AUTHORIZATION`.
    pub fn header(&self, key: &str) -> Result<&str, MissingParameterError> {
        Self::required(&self.server, ParameterLocation::Header, key)
    }

    pub fn header_or<'a>(&'a self, key: &str, default: Option<&'a str>) -> Option<&'a str> {
        Self::optional(&self.server, ParameterLocation::Header, key, default)
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn server_metadata(&self) -> &Parameters {
        &self.server
    }

    pub fn query_parameters(&self) -> &Parameters {
        &self.query
    }

    pub fn form_parameters(&self) -> &Parameters {
        &self.form
    }

    pub fn options(&self) -> ContextOptions {
        self.options
    }

    fn meta(&self, key: &str) -> &str {
        params::meta(&self.server, key)
    }

    fn required<'a>(
        values: &'a Parameters,
        location: ParameterLocation,
        key: &str,
    ) -> Result<&'a str, MissingParameterError> {
        params::value_from(values, location, key, true, None)?
            .ok_or_else(|| MissingParameterError::new(location, key))
    }

    fn optional<'a>(
        values: &'a Parameters,
        location: ParameterLocation,
        key: &str,
        default: Option<&'a str>,
    ) -> Option<&'a str> {
        params::value_from(values, location, key, false, default).unwrap_or(default)
    }
}

impl fmt::Display for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.server {
            writeln!(f, "{key} => '{value}'")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
