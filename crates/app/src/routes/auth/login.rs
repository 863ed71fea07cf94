use api_client::PubCashApi;
use dioxus::prelude::*;
use shared_types::{AppError, LoginRequest};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle,
    Input, Label,
};
use std::collections::HashMap;

use crate::api::use_api;
use crate::auth::{use_pending_verification, use_session};
use crate::forms::{field_error, split_error, validate_request};
use crate::route_table::PageId;
use crate::routes::Route;
use crate::session::SessionProvider;

/// Where a successful login leads.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// Token stored; go to the dashboard.
    SignedIn,
    /// The backend wants a one-time code for this email first.
    OtpRequired { email: String },
}

/// Validate, call the backend and store the token if one came back.
pub async fn submit_login(
    api: &impl PubCashApi,
    session: &dyn SessionProvider,
    req: LoginRequest,
) -> Result<LoginOutcome, AppError> {
    validate_request(&req)?;
    let resp = api.login(&req).await?;

    match resp.token.filter(|t| !t.trim().is_empty()) {
        Some(token) => {
            session.set(&token);
            tracing::info!("admin signed in");
            Ok(LoginOutcome::SignedIn)
        }
        None if resp.otp_required => {
            tracing::info!("login requires otp verification");
            Ok(LoginOutcome::OtpRequired { email: req.email })
        }
        None => Err(AppError::unauthorized(
            resp.message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| "Login failed. Please check your credentials.".to_string()),
        )),
    }
}

/// Admin sign-in page.
#[component]
pub fn Login() -> Element {
    let api = use_api();
    let session = use_session();
    let mut pending = use_pending_verification();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    // Already signed in
    if session.is_authenticated() {
        navigator().replace(Route::page(PageId::AdminDashboard));
    }

    let handle_login = move |evt: FormEvent| {
        let api = api.clone();
        let session = session.clone();
        async move {
            evt.prevent_default();
            loading.set(true);
            error_msg.set(None);
            field_errors.set(HashMap::new());

            let req = LoginRequest {
                email: email().trim().to_string(),
                password: password(),
            };
            match submit_login(&api, &*session, req).await {
                Ok(LoginOutcome::SignedIn) => {
                    navigator().replace(Route::page(PageId::AdminDashboard));
                }
                Ok(LoginOutcome::OtpRequired { email }) => {
                    pending.email.set(Some(email));
                    navigator().push(Route::page(PageId::VerifyOtp));
                }
                Err(e) => {
                    let (banner, fields) = split_error(&e);
                    error_msg.set(banner);
                    field_errors.set(fields);
                }
            }
            loading.set(false);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Sign In" }
                    CardDescription { "Sign in to the PubCash admin console" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { onsubmit: handle_login,
                        div { class: "auth-field",
                            Label { html_for: "email", "Email" }
                            Input {
                                input_type: "email",
                                id: "email",
                                placeholder: "admin@pubcash.com",
                                value: email(),
                                error: field_error(&field_errors(), "email"),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "password", "Password" }
                            Input {
                                input_type: "password",
                                id: "password",
                                placeholder: "Enter your password",
                                value: password(),
                                error: field_error(&field_errors(), "password"),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                        }
                        Button {
                            button_type: "submit",
                            variant: ButtonVariant::Primary,
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "No admin account yet? "
                        Link { to: Route::page(PageId::Register), "Create one" }
                    }
                }
            }
        }
    }
}
