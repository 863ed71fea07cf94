use api_client::PubCashApi;
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, LoginRequest, VerifyOtpRequest};

use crate::common;

#[tokio::test]
async fn test_login_asks_for_otp() {
    let (api, stub) = common::stub_backend().await;

    let resp = api
        .login(&LoginRequest {
            email: "admin@pubcash.test".into(),
            password: common::GOOD_PASSWORD.into(),
        })
        .await
        .unwrap();
    assert!(resp.otp_required);
    assert_eq!(resp.token, None);
    assert_eq!(stub.calls("login"), 1);
}

#[tokio::test]
async fn test_bad_password_is_unauthorized() {
    let (api, _stub) = common::stub_backend().await;

    let err = api
        .login(&LoginRequest {
            email: "admin@pubcash.test".into(),
            password: "nope".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.friendly_message(), "Identifiants invalides");
}

#[tokio::test]
async fn test_valid_otp_returns_token() {
    let (api, stub) = common::stub_backend().await;

    let resp = api
        .verify_otp(&VerifyOtpRequest {
            email: "admin@pubcash.test".into(),
            otp: common::GOOD_OTP.into(),
        })
        .await
        .unwrap();
    assert_eq!(resp.token.as_deref(), Some(common::ISSUED_TOKEN));
    assert_eq!(stub.calls("verify_otp"), 1);
}

#[tokio::test]
async fn test_wrong_otp_surfaces_message() {
    let (api, _stub) = common::stub_backend().await;

    let err = api
        .verify_otp(&VerifyOtpRequest {
            email: "admin@pubcash.test".into(),
            otp: "000000".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert_eq!(err.friendly_message(), "Code OTP invalide ou expiré");
}
