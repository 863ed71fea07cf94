use api_client::PubCashApi;
use pretty_assertions::assert_eq;
use shared_types::{AppError, AppErrorKind, RegisterAdminRequest};

use crate::common;

fn request(email: &str) -> RegisterAdminRequest {
    RegisterAdminRequest {
        nom: "Diallo".into(),
        prenom: "Awa".into(),
        email: email.into(),
        password: "long-enough-password".into(),
    }
}

#[tokio::test]
async fn test_register_returns_server_message() {
    let (api, stub) = common::stub_backend().await;

    let resp = api
        .register_admin(&request("new-admin@pubcash.test"))
        .await
        .unwrap();
    assert_eq!(resp.message, "Compte administrateur créé");
    assert_eq!(stub.calls("register"), 1);
}

#[tokio::test]
async fn test_rejected_registration_carries_server_message() {
    let (api, stub) = common::stub_backend().await;

    let err: AppError = api
        .register_admin(&request(common::TAKEN_EMAIL))
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Conflict);
    assert_eq!(err.friendly_message(), "Cet email est déjà utilisé");
    assert_eq!(stub.calls("register"), 1);
}
