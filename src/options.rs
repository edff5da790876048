use crate::error::ConfigurationError;

/// How [`RequestContext::authority`](crate::RequestContext::authority) picks
/// the scheme and decides whether to print the port.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SchemePolicy {
    /// Always emit `https`. No port suffix is ever printed, whatever
    /// `REQUEST_SCHEME` or `SERVER_PORT` say. Existing deployments rely on
    /// these absolute URLs, so this stays the default.
    #[default]
    ForceHttps,
    /// Honor `REQUEST_SCHEME` (falling back to `http`) and suppress the port
    /// only when it is the scheme's default.
    FromMetadata,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ContextOptions {
    pub scheme: SchemePolicy,
    /// Let `X-Forwarded-Proto` override `REQUEST_SCHEME`. Only enable behind
    /// a proxy that strips the header from client traffic.
    pub trust_forwarded_proto: bool,
}

impl ContextOptions {
    pub fn from_metadata() -> Self {
        Self {
            scheme: SchemePolicy::FromMetadata,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.trust_forwarded_proto && self.scheme == SchemePolicy::ForceHttps {
            return Err(ConfigurationError::ForwardedProtoRequiresMetadataScheme);
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
