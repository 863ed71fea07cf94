use dioxus::prelude::*;
use shared_ui::{PageHeader, PageTitle};

use crate::components::{ProfileBanner, ProfileDetails, ProfileSource};

#[component]
pub fn UserDashboard() -> Element {
    rsx! {
        div { class: "user-page",
            ProfileBanner {
                source: ProfileSource::User,
                fallback_description: "Watch ads, earn rewards.",
            }
        }
    }
}

#[component]
pub fn UserProfile() -> Element {
    rsx! {
        div { class: "user-page",
            PageHeader {
                PageTitle { "My profile" }
            }
            ProfileDetails { source: ProfileSource::User }
        }
    }
}
