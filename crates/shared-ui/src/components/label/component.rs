use dioxus::prelude::*;
use dioxus_primitives::label as prim;

/// Form label; pass `html_for` to bind it to an input id.
#[component]
pub fn Label(mut props: prim::LabelProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "pc-label", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Label { ..props }
    }
}
