use dioxus::prelude::*;
use shared_types::Profile;

/// Inline style for the header banner: the profile's background image when
/// it has one, the theme gradient otherwise.
pub fn banner_style(profile: &Profile) -> String {
    match profile
        .background_image_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
    {
        Some(url) => format!(
            "background-image: url('{}'); background-size: cover; background-position: center top;",
            url.replace('\'', "%27")
        ),
        None => "background-image: var(--pc-header-gradient);".to_string(),
    }
}

/// Dashboard banner greeting the signed-in account.
///
/// Renders whatever profile it is handed; fetching is the page's job.
#[component]
pub fn ProfileHeader(
    profile: Profile,
    #[props(default)] fallback_description: String,
) -> Element {
    let style = banner_style(&profile);
    let greeting = profile.greeting();
    let description = profile
        .description
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or(fallback_description);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "pc-profile-header", style: "{style}",
            span { class: "pc-profile-header-mask" }
            div { class: "pc-profile-header-body",
                h1 { class: "pc-profile-header-title", "{greeting}" }
                if !description.is_empty() {
                    p { class: "pc-profile-header-description", "{description}" }
                }
            }
        }
    }
}
