use api_client::{ApiClient, PubCashApi};
use pretty_assertions::assert_eq;
use shared_types::AppErrorKind;

use crate::common;

#[tokio::test]
async fn test_token_is_sent_as_bearer() {
    let (api, stub) = common::stub_backend().await;

    let profile = api
        .with_token(Some(common::ISSUED_TOKEN.into()))
        .admin_profile()
        .await
        .unwrap();
    assert_eq!(profile.greeting(), "Hello Awa");
    assert_eq!(
        stub.last_authorization(),
        Some(format!("Bearer {}", common::ISSUED_TOKEN))
    );
}

#[tokio::test]
async fn test_missing_token_sends_no_header() {
    let (api, stub) = common::stub_backend().await;

    let err = api.admin_profile().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(stub.last_authorization(), None);
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let api = ApiClient::new("http://127.0.0.1:9/api");

    let err = api.maintenance().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Network);
    assert_eq!(
        err.friendly_message(),
        "Unable to reach the server. Check your connection and try again."
    );
}
