use api_client::PubCashApi;
use dioxus::prelude::*;
use shared_types::{AppError, RegisterAdminRequest};
use shared_ui::{
    use_toast, Button, ButtonVariant, Card, CardContent, CardDescription, CardFooter, CardHeader,
    CardTitle, Input, Label, ToastOptions,
};
use std::collections::HashMap;
use std::time::Duration;

use crate::api::use_api;
use crate::dom;
use crate::forms::{field_error, split_error, validate_request};
use crate::route_table::PageId;
use crate::routes::Route;

/// How long the success message stays up before moving on to login.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(2);

const DEFAULT_SUCCESS_MESSAGE: &str = "Account created. Redirecting to sign in...";

/// Accepted registration: what to show and where to go afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Registered {
    pub message: String,
    pub redirect_to: PageId,
    pub after: Duration,
}

pub async fn submit_registration(
    api: &impl PubCashApi,
    req: RegisterAdminRequest,
) -> Result<Registered, AppError> {
    validate_request(&req)?;
    let resp = api.register_admin(&req).await?;
    tracing::info!("admin account registered");

    let message = if resp.message.trim().is_empty() {
        DEFAULT_SUCCESS_MESSAGE.to_string()
    } else {
        resp.message
    };
    Ok(Registered {
        message,
        redirect_to: PageId::Login,
        after: REDIRECT_DELAY,
    })
}

/// Admin registration page.
#[component]
pub fn Register() -> Element {
    let api = use_api();
    let toast = use_toast();
    let mut form = use_signal(RegisterAdminRequest::default);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut success_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        let api = api.clone();
        async move {
            evt.prevent_default();
            loading.set(true);
            error_msg.set(None);
            success_msg.set(None);
            field_errors.set(HashMap::new());

            let mut req = form();
            req.email = req.email.trim().to_string();
            match submit_registration(&api, req).await {
                Ok(done) => {
                    toast.success(done.message.clone(), ToastOptions::new());
                    success_msg.set(Some(done.message));
                    dom::sleep(done.after).await;
                    navigator().replace(Route::page(done.redirect_to));
                }
                Err(e) => {
                    tracing::warn!(kind = %e.kind, "registration rejected");
                    let (banner, fields) = split_error(&e);
                    if let Some(msg) = &banner {
                        toast.error(msg.clone(), ToastOptions::new());
                    }
                    error_msg.set(banner);
                    field_errors.set(fields);
                    loading.set(false);
                }
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Create Admin Account" }
                    CardDescription { "Register a new PubCash administrator" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }
                    if let Some(msg) = success_msg() {
                        div { class: "auth-success", "{msg}" }
                    }

                    form { onsubmit: handle_register,
                        div { class: "auth-field-row",
                            div { class: "auth-field",
                                Label { html_for: "nom", "Last name" }
                                Input {
                                    id: "nom",
                                    placeholder: "Diop",
                                    value: form().nom,
                                    error: field_error(&field_errors(), "nom"),
                                    on_input: move |e: FormEvent| form.write().nom = e.value(),
                                }
                            }
                            div { class: "auth-field",
                                Label { html_for: "prenom", "First name" }
                                Input {
                                    id: "prenom",
                                    placeholder: "Awa",
                                    value: form().prenom,
                                    error: field_error(&field_errors(), "prenom"),
                                    on_input: move |e: FormEvent| form.write().prenom = e.value(),
                                }
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "email", "Email" }
                            Input {
                                input_type: "email",
                                id: "email",
                                placeholder: "admin@pubcash.com",
                                value: form().email,
                                error: field_error(&field_errors(), "email"),
                                on_input: move |e: FormEvent| form.write().email = e.value(),
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "password", "Password" }
                            Input {
                                input_type: "password",
                                id: "password",
                                placeholder: "At least 8 characters",
                                value: form().password,
                                error: field_error(&field_errors(), "password"),
                                on_input: move |e: FormEvent| form.write().password = e.value(),
                            }
                        }
                        Button {
                            button_type: "submit",
                            variant: ButtonVariant::Primary,
                            disabled: loading(),
                            if loading() { "Creating account..." } else { "Create Account" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Already registered? "
                        Link { to: Route::page(PageId::Login), "Sign in" }
                    }
                }
            }
        }
    }
}
