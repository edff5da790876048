mod common;

use common::builders::{HostEnvBuilder, host_env};
use insta::assert_yaml_snapshot;
use request_env_rs::ContextOptions;
use request_env_rs::constants::meta;
use serde::Serialize;

#[derive(Serialize)]
struct DerivedSnapshot {
    method: String,
    authority: String,
    uri: String,
    root: String,
    root_uri: String,
    path_info: String,
    is_browser: bool,
}

fn capture(host: HostEnvBuilder) -> DerivedSnapshot {
    let context = host.build();
    DerivedSnapshot {
        method: context.request_method().to_string(),
        authority: context.authority(),
        uri: context.uri(),
        root: context.root(),
        root_uri: context.root_uri(),
        path_info: context.path_info().to_string(),
        is_browser: context.is_browser(),
    }
}

#[test]
fn front_controller_sub_directory_snapshot() {
    let snapshot = capture(
        host_env()
            .script_name("/app/index.php")
            .uri("/app/index.php/users/42?tab=profile")
            .accept("text/html,application/xhtml+xml"),
    );

    assert_yaml_snapshot!("front_controller_sub_directory_snapshot", snapshot);
}

#[test]
fn rewritten_web_root_from_metadata_snapshot() {
    let snapshot = capture(
        host_env()
            .method("POST")
            .scheme("http")
            .port("8080")
            .script_name("/index.php")
            .uri("/blog/2024/hello?draft=1")
            .accept("application/json")
            .options(ContextOptions::from_metadata()),
    );

    assert_yaml_snapshot!("rewritten_web_root_from_metadata_snapshot", snapshot);
}

#[test]
fn behind_tls_proxy_snapshot() {
    let snapshot = capture(
        host_env()
            .method("DELETE")
            .scheme("http")
            .port("443")
            .var(meta::HTTP_X_FORWARDED_PROTO, "https")
            .script_name("/api/v2/index.php")
            .uri("/api/v2/orders/7")
            .options(ContextOptions {
                trust_forwarded_proto: true,
                ..ContextOptions::from_metadata()
            }),
    );

    assert_yaml_snapshot!("behind_tls_proxy_snapshot", snapshot);
}
