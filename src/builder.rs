use crate::context::RequestContext;
use crate::error::ConfigurationError;
use crate::options::ContextOptions;
use crate::params::{self, Parameters};

/// Fluent construction for [`RequestContext`].
///
/// Only the server metadata is mandatory; query, form and body default to
/// empty. [`build`](Self::build) runs the same validation as
/// [`RequestContext::new`].
#[derive(Debug, Default, Clone)]
pub struct RequestContextBuilder {
    server: Parameters,
    query: Parameters,
    form: Parameters,
    body: Option<String>,
    options: ContextOptions,
}

impl RequestContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn server_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.server.insert(key.into(), value.into());
        self
    }

    pub fn server_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.server.extend(params::collect(vars));
        self
    }

    pub fn query<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.query.extend(params::collect(entries));
        self
    }

    pub fn form<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.form.extend(params::collect(entries));
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn options(mut self, options: ContextOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(self) -> Result<RequestContext, ConfigurationError> {
        RequestContext::with_options(self.options, self.server, self.query, self.form, self.body)
    }
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod builder_test;
