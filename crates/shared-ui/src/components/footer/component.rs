use dioxus::prelude::*;

/// Copyright line, e.g. "© 2026 PubCash".
pub fn copyright_line(year: i32, brand: &str) -> String {
    format!("\u{a9} {year} {brand}")
}

/// Page footer shared by every layout shell.
///
/// The year is passed in so rendering stays deterministic.
#[component]
pub fn Footer(
    year: i32,
    #[props(default = "PubCash".to_string())] brand: String,
    #[props(default = false)] transparent: bool,
) -> Element {
    let line = copyright_line(year, &brand);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        footer {
            class: "pc-footer",
            "data-transparent": if transparent { "true" } else { "false" },
            div { class: "pc-footer-copyright", "{line}" }
        }
    }
}
