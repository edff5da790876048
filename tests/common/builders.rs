#![allow(dead_code)]

use request_env_rs::constants::meta;
use request_env_rs::{ConfigurationError, ContextOptions, Parameters, RequestContext};

/// Hosting-layer stand-in that assembles the metadata bag a web server would
/// hand over for one request.
#[derive(Clone)]
pub struct HostEnvBuilder {
    server: Parameters,
    query: Parameters,
    form: Parameters,
    body: Option<String>,
    options: ContextOptions,
}

impl HostEnvBuilder {
    pub fn new() -> Self {
        let mut server = Parameters::new();
        server.insert(meta::REQUEST_METHOD.into(), "GET".into());
        server.insert(meta::SERVER_NAME.into(), "example.org".into());
        server.insert(meta::SERVER_PORT.into(), "80".into());
        server.insert(meta::REQUEST_URI.into(), "/".into());
        server.insert(meta::SCRIPT_NAME.into(), "/index.php".into());

        Self {
            server,
            query: Parameters::new(),
            form: Parameters::new(),
            body: None,
            options: ContextOptions::default(),
        }
    }

    pub fn var(mut self, key: &str, value: impl Into<String>) -> Self {
        self.server.insert(key.to_string(), value.into());
        self
    }

    pub fn without(mut self, key: &str) -> Self {
        self.server.shift_remove(key);
        self
    }

    pub fn method(self, value: &str) -> Self {
        self.var(meta::REQUEST_METHOD, value)
    }

    pub fn server_name(self, value: &str) -> Self {
        self.var(meta::SERVER_NAME, value)
    }

    pub fn port(self, value: &str) -> Self {
        self.var(meta::SERVER_PORT, value)
    }

    pub fn uri(self, value: &str) -> Self {
        self.var(meta::REQUEST_URI, value)
    }

    pub fn script_name(self, value: &str) -> Self {
        self.var(meta::SCRIPT_NAME, value)
    }

    pub fn scheme(self, value: &str) -> Self {
        self.var(meta::REQUEST_SCHEME, value)
    }

    pub fn accept(self, value: &str) -> Self {
        self.var(meta::HTTP_ACCEPT, value)
    }

    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.query.insert(key.to_string(), value.to_string());
        self
    }

    pub fn form(mut self, key: &str, value: &str) -> Self {
        self.form.insert(key.to_string(), value.to_string());
        self
    }

    pub fn body(mut self, value: &str) -> Self {
        self.body = Some(value.to_string());
        self
    }

    pub fn options(mut self, options: ContextOptions) -> Self {
        self.options = options;
        self
    }

    pub fn try_build(self) -> Result<RequestContext, ConfigurationError> {
        RequestContext::with_options(self.options, self.server, self.query, self.form, self.body)
    }

    pub fn build(self) -> RequestContext {
        self.try_build().expect("valid host environment")
    }
}

pub fn host_env() -> HostEnvBuilder {
    HostEnvBuilder::new()
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
