use api_client::PubCashApi;
use dioxus::prelude::*;
use shared_types::{AppError, Profile};
use shared_ui::{Card, CardContent, CardHeader, CardTitle, ProfileHeader};

use crate::api::use_api;

/// Which account's profile a page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileSource {
    Admin,
    User,
}

pub async fn fetch_profile(api: &impl PubCashApi, source: ProfileSource) -> Result<Profile, AppError> {
    match source {
        ProfileSource::Admin => api.admin_profile().await,
        ProfileSource::User => api.user_profile().await,
    }
}

/// A failed fetch still renders: the empty profile plus a message to show.
pub fn profile_or_default(result: Result<Profile, AppError>) -> (Profile, Option<String>) {
    match result {
        Ok(profile) => (profile, None),
        Err(e) => {
            tracing::warn!(kind = %e.kind, error = %e, "profile fetch failed");
            (Profile::default(), Some(e.friendly_message()))
        }
    }
}

fn use_profile(source: ProfileSource) -> Resource<(Profile, Option<String>)> {
    let api = use_api();
    use_resource(move || {
        let api = api.clone();
        async move { profile_or_default(fetch_profile(&api, source).await) }
    })
}

/// Dashboard banner greeting the account behind `source`.
#[component]
pub fn ProfileBanner(source: ProfileSource, #[props(default)] fallback_description: String) -> Element {
    let profile = use_profile(source);

    match &*profile.read() {
        Some((profile, error)) => rsx! {
            ProfileHeader {
                profile: profile.clone(),
                fallback_description: fallback_description.clone(),
            }
            if let Some(err) = error {
                div { class: "page-error", "{err}" }
            }
        },
        None => rsx! {
            ProfileHeader { profile: Profile::default(), fallback_description }
        },
    }
}

/// Card listing the profile fields.
#[component]
pub fn ProfileDetails(source: ProfileSource) -> Element {
    let profile = use_profile(source);

    rsx! {
        Card {
            CardHeader { CardTitle { "Profile" } }
            CardContent {
                match &*profile.read() {
                    Some((profile, error)) => rsx! {
                        if let Some(err) = error {
                            div { class: "page-error", "{err}" }
                        }
                        dl { class: "profile-details",
                            dt { "First name" }
                            dd { {profile.first_name().unwrap_or("Not set")} }
                            dt { "About" }
                            dd { {profile.description.as_deref().unwrap_or("Not set")} }
                            dt { "Banner image" }
                            dd {
                                if profile.background_image_url.is_some() { "Custom" } else { "Default" }
                            }
                        }
                    },
                    None => rsx! { p { class: "text-muted", "Loading profile..." } },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::FakeApi;
    use pretty_assertions::assert_eq;
    use shared_types::AppErrorKind;

    #[tokio::test]
    async fn fetch_uses_the_matching_endpoint() {
        let api = FakeApi::new();
        fetch_profile(&api, ProfileSource::Admin).await.unwrap();
        fetch_profile(&api, ProfileSource::User).await.unwrap();
        assert_eq!(api.calls("admin_profile"), 1);
        assert_eq!(api.calls("user_profile"), 1);
    }

    #[tokio::test]
    async fn failed_fetch_degrades_to_empty_profile() {
        let api = FakeApi::new();
        *api.profile.borrow_mut() = Some(Err(AppError::from_status(401, r#"{"message":"Token expired"}"#)));
        let result = fetch_profile(&api, ProfileSource::Admin).await;
        assert_eq!(result.as_ref().unwrap_err().kind, AppErrorKind::Unauthorized);

        let (profile, message) = profile_or_default(result);
        assert_eq!(profile, Profile::default());
        assert_eq!(message.as_deref(), Some("Token expired"));
    }

    #[tokio::test]
    async fn successful_fetch_has_no_message() {
        let api = FakeApi::new();
        let awa = Profile {
            prenom: Some("Awa".into()),
            ..Profile::default()
        };
        *api.profile.borrow_mut() = Some(Ok(awa.clone()));
        let (profile, message) = profile_or_default(fetch_profile(&api, ProfileSource::User).await);
        assert_eq!(profile, awa);
        assert_eq!(message, None);
    }
}
