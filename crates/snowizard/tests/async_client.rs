#![cfg(feature = "async-tokio")]

mod common;

use axum::http::StatusCode;
use common::{MockServer, closed_host};
use prost::Message;
use snowizard::{AsyncSnowizardClient, Error, ServerResponse, USER_AGENT, WireFormat};
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_millis(500);

#[tokio::test]
async fn first_healthy_host_wins() {
    let a = MockServer::ok("111");
    let b = MockServer::ok("222");
    let client = AsyncSnowizardClient::text([a.host(), b.host()], TIMEOUT).unwrap();

    assert_eq!(client.next_id().await, Ok(111));
    assert_eq!(b.hits(), 0);
}

#[tokio::test]
async fn fails_over_past_errors_and_closed_ports() {
    let a = MockServer::start(StatusCode::INTERNAL_SERVER_ERROR, "");
    let c = MockServer::ok(ServerResponse::new(0).encode_to_vec());
    let client =
        AsyncSnowizardClient::protobuf([a.host(), closed_host(), c.host()], TIMEOUT).unwrap();

    assert_eq!(client.next_id().await, Ok(0));
    assert_eq!(a.hits(), 1);
    assert_eq!(c.hits(), 1);
}

#[tokio::test]
async fn all_hosts_down_is_no_servers() {
    let client = AsyncSnowizardClient::json([closed_host(), closed_host()], TIMEOUT).unwrap();
    assert_eq!(client.next_id().await, Err(Error::NoServers));
}

#[tokio::test]
async fn malformed_body_on_only_host_is_no_servers() {
    let a = MockServer::ok(r#"{"id": null}"#);
    let client = AsyncSnowizardClient::json([a.host()], TIMEOUT).unwrap();
    assert_eq!(client.next_id().await, Err(Error::NoServers));
    assert_eq!(a.hits(), 1);
}

#[tokio::test]
async fn requests_carry_format_headers() {
    let a = MockServer::ok(r#"{"id": 5}"#);
    let client = AsyncSnowizardClient::new([a.host()], WireFormat::Json, TIMEOUT).unwrap();
    assert_eq!(client.next_id().await, Ok(5));

    let requests = a.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/");
    assert_eq!(requests[0].content_type.as_deref(), Some("application/json"));
    assert_eq!(requests[0].user_agent.as_deref(), Some(USER_AGENT));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_callers_share_one_client() {
    let a = MockServer::ok("31337");
    let client = AsyncSnowizardClient::text([a.host()], TIMEOUT).unwrap();

    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.next_id().await })
        })
        .collect();

    for task in tasks {
        assert_eq!(task.await.unwrap(), Ok(31337));
    }
    assert_eq!(a.hits(), 16);
}
