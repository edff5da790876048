#![allow(dead_code)]

use request_env_rs::{ConfigurationError, RequestContext};

pub fn assert_missing_metadata(
    result: Result<RequestContext, ConfigurationError>,
) -> &'static str {
    match result {
        Err(ConfigurationError::MissingMetadata(key)) => key,
        other => panic!("expected missing metadata error, got {:?}", other),
    }
}

pub fn assert_consistent(context: &RequestContext) {
    let authority = context.authority();
    let root = context.root();

    assert!(root.ends_with('/'), "root {root:?} must end with a slash");
    assert_eq!(context.root_uri(), format!("{authority}{root}"));
    assert!(context.uri().starts_with(&authority));
    assert!(!context.path_info().contains('?'));
}
