//! End-to-end tests of the async client against the live mock server.

use mock_server::MockState;
use palworld_core::{ApiError, AsyncPalworldClient, ClientConfig};

const PASSWORD: &str = "password";

/// Start the mock server on a random port; returns its base URL and a handle
/// on its state.
async fn start_server() -> (String, MockState) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let state = MockState::new(PASSWORD);
    tokio::spawn(mock_server::run(listener, state.clone()));
    (format!("http://{addr}"), state)
}

fn connect(base_url: &str, password: &str) -> AsyncPalworldClient {
    AsyncPalworldClient::new(ClientConfig::new(password).with_base_url(base_url)).unwrap()
}

#[tokio::test]
async fn get_endpoints() {
    let (base_url, _) = start_server().await;
    let client = connect(&base_url, PASSWORD);

    let info = client.get_info().await.unwrap();
    assert_eq!(info.version, "v0.3.11.61046");

    let roster = client.get_players().await.unwrap();
    assert_eq!(roster.players[0].account_name, "zoe_acc");
    assert_eq!(roster.players[0].location_x, -1200.25);

    let settings = client.get_settings().await.unwrap();
    assert_eq!(settings.crossplay_platforms.len(), 4);

    let metrics = client.get_metrics().await.unwrap();
    assert_eq!(metrics.serverfps, 60);
    assert_eq!(metrics.serverframetime, 16.6);
}

#[tokio::test]
async fn post_endpoints_reach_the_server() {
    let (base_url, state) = start_server().await;
    let client = connect(&base_url, PASSWORD);

    client.announce("Hello!").await.unwrap();
    client
        .kick("steam_76561198000000001", Some("bye"))
        .await
        .unwrap();
    client.ban("u2", None).await.unwrap();
    client.unban("u2").await.unwrap();
    client.ban("u3", Some("See you next time.")).await.unwrap();
    client.save().await.unwrap();
    client.shutdown(10, Some("shutdown soon")).await.unwrap();
    client.stop().await.unwrap();

    assert_eq!(
        state.announcements().await,
        vec!["Hello!", "bye", "See you next time.", "shutdown soon"]
    );
    assert_eq!(state.banned().await, vec!["u3"]);
    assert_eq!(state.saves().await, 1);
    assert_eq!(state.shutdown_after().await, Some(10));
    assert!(state.is_stopped().await);
}

#[tokio::test]
async fn unauthorized_info_is_a_request_failure() {
    let (base_url, _) = start_server().await;
    let client = connect(&base_url, "wrong");

    let err = client.get_info().await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    let message = err.to_string();
    assert!(message.contains("401"));
    assert!(message.contains("unauthorized"));
}

#[tokio::test]
async fn scoped_session_closes_after_failure() {
    let (base_url, _) = start_server().await;
    let mut client = connect(&base_url, PASSWORD);

    let result: Result<(), ApiError> = client
        .scoped(async |c| {
            c.get_metrics().await?;
            c.kick("nobody", None).await
        })
        .await;
    assert_eq!(result.unwrap_err().status(), Some(400));
    assert!(client.is_closed());

    let err = client.get_info().await.unwrap_err();
    assert!(err.is_closed());
}

#[tokio::test]
async fn explicit_close_is_idempotent() {
    let (base_url, _) = start_server().await;
    let mut client = connect(&base_url, PASSWORD);

    client.get_info().await.unwrap();
    client.close();
    client.close();
    assert!(client.is_closed());
    assert!(client.save().await.unwrap_err().is_closed());
}
