use dioxus::prelude::*;
use dioxus_primitives::navbar as prim;

#[component]
pub fn Navbar(mut props: prim::NavbarProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "pc-navbar", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Navbar { ..props }
    }
}

/// Brand text shown at the left of a navbar.
#[component]
pub fn NavbarBrand(text: String) -> Element {
    rsx! {
        span { class: "pc-navbar-brand", "{text}" }
    }
}

/// Right-aligned action area of a navbar.
#[component]
pub fn NavbarActions(children: Element) -> Element {
    rsx! {
        div { class: "pc-navbar-actions", {children} }
    }
}
