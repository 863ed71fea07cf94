use api_client::PubCashApi;
use dioxus::prelude::*;
use shared_types::{AppError, VerifyOtpRequest};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader,
    CardTitle, Input, Label, ToastOptions,
};
use std::collections::HashMap;

use crate::api::use_api;
use crate::auth::{use_pending_verification, use_session};
use crate::route_table::PageId;
use crate::routes::Route;
use crate::session::SessionProvider;

pub const MISSING_EMAIL_MESSAGE: &str =
    "No email address is waiting for verification. Please sign in again.";

/// Result of a successful verification.
#[derive(Debug, Clone, PartialEq)]
pub enum OtpOutcome {
    /// A token came back and was stored.
    SignedIn,
    /// The code was accepted but the account must still sign in.
    Verified { message: String },
}

/// The pending email, or the error shown when there is none.
pub fn require_email(email: Option<String>) -> Result<String, AppError> {
    email
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
        .ok_or_else(|| AppError::missing_context(MISSING_EMAIL_MESSAGE))
}

pub async fn submit_otp(
    api: &impl PubCashApi,
    session: &dyn SessionProvider,
    email: Option<String>,
    otp: &str,
) -> Result<OtpOutcome, AppError> {
    let email = require_email(email)?;
    let otp = otp.trim();
    if otp.is_empty() {
        let mut fields = HashMap::new();
        fields.insert("otp".to_string(), "Enter the code you received".to_string());
        return Err(AppError::validation("Enter the code you received", fields));
    }

    let resp = api
        .verify_otp(&VerifyOtpRequest {
            email,
            otp: otp.to_string(),
        })
        .await?;

    match resp.token.filter(|t| !t.trim().is_empty()) {
        Some(token) => {
            session.set(&token);
            tracing::info!("otp verified, session stored");
            Ok(OtpOutcome::SignedIn)
        }
        None => Ok(OtpOutcome::Verified {
            message: resp
                .message
                .unwrap_or_else(|| "Code verified. You can now sign in.".to_string()),
        }),
    }
}

/// One-time code entry for the email stashed by the login page.
#[component]
pub fn VerifyOtp() -> Element {
    let api = use_api();
    let session = use_session();
    let pending = use_pending_verification();
    let toast = use_toast();
    let mut otp = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let pending_email = (pending.email)();
    let missing_email = require_email(pending_email.clone()).err();

    let handle_verify = move |evt: FormEvent| {
        let api = api.clone();
        let session = session.clone();
        async move {
            evt.prevent_default();
            loading.set(true);
            error_msg.set(None);

            match submit_otp(&api, &*session, (pending.email)(), &otp()).await {
                Ok(OtpOutcome::SignedIn) => {
                    toast.success("Verification successful".to_string(), ToastOptions::new());
                    let mut email = pending.email;
                    email.set(None);
                    navigator().replace(Route::page(PageId::AdminDashboard));
                }
                Ok(OtpOutcome::Verified { message }) => {
                    toast.success(message, ToastOptions::new());
                    navigator().replace(Route::page(PageId::Login));
                }
                Err(e) => {
                    tracing::warn!(kind = %e.kind, "otp verification failed");
                    error_msg.set(Some(e.friendly_message()));
                }
            }
            loading.set(false);
        }
    };

    let banner = missing_email
        .as_ref()
        .map(AppError::friendly_message)
        .or(error_msg());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Verify your account" }
                    CardDescription {
                        match &pending_email {
                            Some(email) => rsx! { "Enter the code sent to {email}" },
                            None => rsx! { "Enter the code we sent you" },
                        }
                    }
                }

                CardContent {
                    if let Some(err) = banner {
                        div { class: "auth-error", "{err}" }
                    }

                    form { onsubmit: handle_verify,
                        div { class: "auth-field",
                            Label { html_for: "otp", "Verification code" }
                            Input {
                                id: "otp",
                                placeholder: "123456",
                                value: otp(),
                                disabled: missing_email.is_some(),
                                on_input: move |e: FormEvent| otp.set(e.value()),
                            }
                        }
                        Button {
                            button_type: "submit",
                            variant: ButtonVariant::Primary,
                            disabled: loading() || missing_email.is_some(),
                            if loading() { "Verifying..." } else { "Verify" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Wrong account? "
                        Link { to: Route::page(PageId::Login), "Back to sign in" }
                    }
                }
            }
        }
    }
}
