// ABOUTME: Integration tests for the SCM API client against a mock server.
// ABOUTME: Covers the items envelope, auth/status mapping, and tunnel lifecycle.

use scmssh::scm::{Error, ScmClient};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ScmClient {
    ScmClient::with_base_url(&server.uri(), "example.riverbed.cc", "admin", "secret").unwrap()
}

/// Test: orgs endpoint unwraps the `{"items": []}` envelope.
#[tokio::test]
async fn orgs_unwraps_items_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/scm.config/1.0/orgs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {"id": "org-1", "name": "Acme", "longname": "Acme Corp"},
                {"id": "org-2", "name": "Globex"}
            ]
        })))
        .mount(&server)
        .await;

    let orgs = client_for(&server).orgs().await.unwrap();
    assert_eq!(orgs.len(), 2);
    assert_eq!(orgs[0].id, "org-1");
    assert_eq!(orgs[0].longname, "Acme Corp");
    assert_eq!(orgs[1].longname, "");
}

/// Test: requests carry HTTP basic auth for the configured credentials.
#[tokio::test]
async fn requests_use_basic_auth() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/scm.config/1.0/sites"))
        .and(header("Authorization", "Basic YWRtaW46c2VjcmV0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(1)
        .mount(&server)
        .await;

    let sites = client_for(&server).sites().await.unwrap();
    assert!(sites.is_empty());
}

/// Test: 401 maps to AuthenticationFailed with the realm named.
#[tokio::test]
async fn http_401_maps_to_authentication_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/scm.config/1.0/orgs"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client_for(&server).orgs().await.unwrap_err();
    assert!(
        matches!(&err, Error::AuthenticationFailed { realm } if realm == "example.riverbed.cc"),
        "expected AuthenticationFailed, got: {err:?}"
    );
    assert!(err.to_string().contains("401"));
}

/// Test: 502 maps to ApiNotEnabled (REST API disabled in the realm).
#[tokio::test]
async fn http_502_maps_to_api_not_enabled() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/scm.reporting/1.0/uplinks"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let err = client_for(&server).uplinks_status().await.unwrap_err();
    assert!(
        matches!(&err, Error::ApiNotEnabled { realm } if realm == "example.riverbed.cc"),
        "expected ApiNotEnabled, got: {err:?}"
    );
}

/// Test: any other non-success status surfaces as UnexpectedStatus.
#[tokio::test]
async fn other_statuses_map_to_unexpected_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/scm.config/1.0/nodes"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).nodes().await.unwrap_err();
    assert!(
        matches!(err, Error::UnexpectedStatus { status: 500, .. }),
        "expected UnexpectedStatus"
    );
}

/// Test: a malformed body is a Decode error, not a panic.
#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/scm.config/1.0/orgs"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server).orgs().await.unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

/// Test: an unreachable server is a Network error with a user-facing hint.
#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let client =
        ScmClient::with_base_url("http://127.0.0.1:1", "example.riverbed.cc", "admin", "secret")
            .unwrap();

    let err = client.orgs().await.unwrap_err();
    assert!(matches!(err, Error::Network { .. }));
    assert!(err.to_string().contains("example.riverbed.cc"));
}

/// Test: tunnel lifecycle hits POST, GET, and DELETE on sshtunnel/{node}.
#[tokio::test]
async fn tunnel_lifecycle_uses_node_scoped_paths() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/scm.config/1.0/sshtunnel/node-1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/scm.config/1.0/sshtunnel/node-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ssh_help": "ssh -o ProxyCommand=\"nc -X connect -x example.riverbed.cc:3900 %h %p\" -o ServerAliveInterval=60 root@node-1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/api/scm.config/1.0/sshtunnel/node-1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.start_tunnel("node-1").await.unwrap();
    let status = client.tunnel_status("node-1").await.unwrap();
    assert!(status.ssh_help.starts_with("ssh "));
    client.stop_tunnel("node-1").await.unwrap();
}

/// Test: active tunnel listing parses node ids.
#[tokio::test]
async fn active_tunnels_parse_node_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/scm.config/1.0/sshtunnel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"node_id": "node-7"}]
        })))
        .mount(&server)
        .await;

    let tunnels = client_for(&server).active_tunnels().await.unwrap();
    assert_eq!(tunnels.len(), 1);
    assert_eq!(tunnels[0].node_id, "node-7");
}

/// Test: starting a tunnel against a 401 realm fails with the auth error.
#[tokio::test]
async fn start_tunnel_propagates_auth_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/scm.config/1.0/sshtunnel/node-1"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client_for(&server).start_tunnel("node-1").await.unwrap_err();
    assert!(matches!(err, Error::AuthenticationFailed { .. }));
}
