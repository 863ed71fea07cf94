use dioxus::prelude::*;
use shared_ui::{Badge, Card, CardContent, CardDescription, CardHeader, CardTitle};

use super::settings::{load_maintenance, maintenance_badge, maintenance_label};
use crate::api::use_api;
use crate::components::{ProfileBanner, ProfileSource};
use crate::route_table::PageId;
use crate::routes::Route;

#[component]
pub fn AdminDashboard() -> Element {
    let api = use_api();
    let maintenance = use_resource(move || {
        let api = api.clone();
        async move { load_maintenance(&api).await }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        div { class: "admin-page",
            ProfileBanner {
                source: ProfileSource::Admin,
                fallback_description: "Manage campaigns, advertisers and platform settings from here.",
            }

            div { class: "admin-grid",
                Card {
                    CardHeader {
                        CardTitle { "Platform status" }
                        CardDescription { "Current state of the public app" }
                    }
                    CardContent {
                        match &*maintenance.read() {
                            Some(Ok(enabled)) => rsx! {
                                Badge { variant: maintenance_badge(*enabled),
                                    {maintenance_label(*enabled)}
                                }
                            },
                            Some(Err(e)) => rsx! {
                                div { class: "page-error", {e.friendly_message()} }
                            },
                            None => rsx! { p { class: "text-muted", "Loading status..." } },
                        }
                        p { class: "admin-card-link",
                            Link { to: Route::page(PageId::AdminSettings), "Open settings" }
                        }
                    }
                }
            }
        }
    }
}
