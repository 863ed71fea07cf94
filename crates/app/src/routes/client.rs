//! Client area pages. They share the admin chrome and session.

use dioxus::prelude::*;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, PageHeader, PageTitle};

use crate::components::{ProfileBanner, ProfileDetails, ProfileSource};
use crate::route_table::PageId;
use crate::routes::Route;

#[component]
pub fn ClientDashboard() -> Element {
    rsx! {
        div { class: "admin-page",
            ProfileBanner {
                source: ProfileSource::Admin,
                fallback_description: "Follow your campaigns and rewards.",
            }
            Card {
                CardHeader {
                    CardTitle { "Your account" }
                    CardDescription { "Review the details attached to this account." }
                }
                CardContent {
                    Link { to: Route::page(PageId::ClientProfile), "View profile" }
                }
            }
        }
    }
}

#[component]
pub fn ClientProfile() -> Element {
    rsx! {
        div { class: "admin-page",
            PageHeader {
                PageTitle { "Profile" }
            }
            ProfileDetails { source: ProfileSource::Admin }
        }
    }
}
