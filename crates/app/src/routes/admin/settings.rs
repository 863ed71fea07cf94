use api_client::PubCashApi;
use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, Label, PageHeader, PageTitle, Switch, SwitchThumb, ToastOptions,
};

use crate::api::use_api;

/// Current maintenance flag as the backend reports it.
pub async fn load_maintenance(api: &impl PubCashApi) -> Result<bool, AppError> {
    Ok(api.maintenance().await?.maintenance_mode)
}

/// Flip the flag with a single update call and return the server's value.
pub async fn toggle_maintenance(api: &impl PubCashApi, current: bool) -> Result<bool, AppError> {
    let status = api.set_maintenance(!current).await?;
    tracing::info!(enabled = status.maintenance_mode, "maintenance mode updated");
    Ok(status.maintenance_mode)
}

pub fn maintenance_label(enabled: bool) -> &'static str {
    if enabled {
        "Maintenance ON"
    } else {
        "Maintenance OFF"
    }
}

pub fn maintenance_badge(enabled: bool) -> BadgeVariant {
    if enabled {
        BadgeVariant::Warning
    } else {
        BadgeVariant::Success
    }
}

/// Value to toggle from, if the switch accepts input right now.
///
/// Input is refused until a load has returned the real flag and while an
/// update is in flight.
pub fn toggle_source(known: Option<bool>, saving: bool) -> Option<bool> {
    if saving {
        None
    } else {
        known
    }
}

/// Platform settings: the maintenance switch.
#[component]
pub fn AdminSettings() -> Element {
    let api = use_api();
    let toast = use_toast();
    let mut enabled = use_signal(|| Option::<bool>::None);
    let mut loading = use_signal(|| true);
    let mut saving = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut reload = use_signal(|| 0u32);

    let load_api = api.clone();
    use_effect(move || {
        reload();
        let api = load_api.clone();
        loading.set(true);
        spawn(async move {
            match load_maintenance(&api).await {
                Ok(value) => {
                    enabled.set(Some(value));
                    error_msg.set(None);
                }
                Err(e) => {
                    tracing::warn!(kind = %e.kind, "could not load maintenance status");
                    error_msg.set(Some(e.friendly_message()));
                }
            }
            loading.set(false);
        });
    });

    let on_toggle = move |_: bool| {
        let Some(current) = toggle_source(enabled(), saving()) else {
            return;
        };
        saving.set(true);
        error_msg.set(None);
        let api = api.clone();
        spawn(async move {
            match toggle_maintenance(&api, current).await {
                Ok(value) => {
                    enabled.set(Some(value));
                    toast.success(
                        format!("{} saved", maintenance_label(value)),
                        ToastOptions::new(),
                    );
                }
                Err(e) => {
                    let msg = e.friendly_message();
                    toast.error(msg.clone(), ToastOptions::new());
                    error_msg.set(Some(msg));
                }
            }
            saving.set(false);
        });
    };

    let load_failed = enabled().is_none() && !loading();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        div { class: "admin-page",
            PageHeader {
                PageTitle { "Settings" }
            }

            Card {
                CardHeader {
                    CardTitle { "Maintenance mode" }
                    CardDescription {
                        "While enabled, the public app shows a maintenance notice and user actions are paused."
                    }
                }
                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "page-error", "{err}" }
                    }

                    div { class: "settings-row",
                        Label { html_for: "maintenance-switch", "Enable maintenance" }
                        Switch {
                            id: "maintenance-switch",
                            checked: Some(enabled().unwrap_or(false)),
                            disabled: toggle_source(enabled(), saving()).is_none(),
                            on_checked_change: on_toggle,
                            SwitchThumb {}
                        }
                        match enabled() {
                            Some(value) => rsx! {
                                Badge { variant: maintenance_badge(value),
                                    {maintenance_label(value)}
                                }
                            },
                            None => rsx! {
                                Badge { variant: BadgeVariant::Muted, "Status unknown" }
                            },
                        }
                        if load_failed {
                            Button {
                                variant: ButtonVariant::Secondary,
                                onclick: move |_| reload += 1,
                                "Retry"
                            }
                        }
                    }
                }
            }
        }
    }
}
