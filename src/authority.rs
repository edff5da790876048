use crate::constants::{meta, port, scheme};
use crate::options::{ContextOptions, SchemePolicy};
use crate::params::{self, Parameters};
use crate::util::{first_list_value, normalize_lower, parse_leading_int};
use std::borrow::Cow;
use std::fmt;

/// Scheme, host and optional port prefix of an absolute URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Authority<'a> {
    scheme: Cow<'a, str>,
    host: &'a str,
    port: Option<i64>,
}

impl<'a> Authority<'a> {
    pub(crate) fn resolve(server: &'a Parameters, options: &ContextOptions) -> Self {
        let host = params::meta(server, meta::SERVER_NAME);
        let server_port = parse_leading_int(params::meta(server, meta::SERVER_PORT));

        let (scheme, port) = match options.scheme {
            // The https default port is never suppressed in this mode, but the
            // http rule can no longer fire either, so the port is always dropped.
            SchemePolicy::ForceHttps => (Cow::Borrowed(scheme::HTTPS), None),
            SchemePolicy::FromMetadata => {
                let scheme = Self::requested_scheme(server, options);
                let port = if Self::is_default_port(&scheme, server_port) {
                    None
                } else {
                    Some(server_port)
                };
                (scheme, port)
            }
        };

        tracing::trace!(scheme = %scheme, host, ?port, "resolved authority");

        Self { scheme, host, port }
    }

    fn requested_scheme(server: &'a Parameters, options: &ContextOptions) -> Cow<'a, str> {
        if options.trust_forwarded_proto
            && let Some(forwarded) = server
                .get(meta::HTTP_X_FORWARDED_PROTO)
                .and_then(|value| first_list_value(value))
        {
            return normalize_lower(forwarded);
        }

        match server.get(meta::REQUEST_SCHEME) {
            Some(value) if !value.trim().is_empty() => normalize_lower(value.trim()),
            _ => Cow::Borrowed(scheme::HTTP),
        }
    }

    fn is_default_port(name: &str, server_port: i64) -> bool {
        match name {
            scheme::HTTP => server_port == port::HTTP,
            scheme::HTTPS => server_port == port::HTTPS,
            _ => false,
        }
    }

    #[cfg(test)]
    pub(crate) fn scheme(&self) -> &str {
        &self.scheme
    }

    #[cfg(test)]
    pub(crate) fn port(&self) -> Option<i64> {
        self.port
    }
}

impl fmt::Display for Authority<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.port {
            Some(port) => write!(f, "{}://{}:{}", self.scheme, self.host, port),
            None => write!(f, "{}://{}", self.scheme, self.host),
        }
    }
}

#[cfg(test)]
#[path = "authority_test.rs"]
mod authority_test;
