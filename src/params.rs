use crate::error::{MissingParameterError, ParameterLocation};
use indexmap::IndexMap;

/// String-keyed request mapping. Keys are unique and the last write wins.
pub type Parameters = IndexMap<String, String>;

/// Looks `key` up in `params`.
///
/// A present key always wins. An absent key is an error when `required`,
/// otherwise `default` is handed back untouched.
pub(crate) fn value_from<'a>(
    params: &'a Parameters,
    location: ParameterLocation,
    key: &str,
    required: bool,
    default: Option<&'a str>,
) -> Result<Option<&'a str>, MissingParameterError> {
    if let Some(value) = params.get(key) {
        return Ok(Some(value.as_str()));
    }

    if required {
        tracing::debug!(%location, key, "required value missing from request");
        return Err(MissingParameterError::new(location, key));
    }

    Ok(default)
}

/// Server metadata lookup for keys validated at construction. Falls back to
/// the empty string so derived values stay total.
pub(crate) fn meta<'a>(server: &'a Parameters, key: &str) -> &'a str {
    server.get(key).map(String::as_str).unwrap_or_default()
}

pub(crate) fn collect<I, K, V>(entries: I) -> Parameters
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    entries
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}

#[cfg(test)]
#[path = "params_test.rs"]
mod params_test;
