use dioxus::prelude::*;
use dioxus_primitives::switch as prim;

/// On/off switch, used by the maintenance toggle.
#[component]
pub fn Switch(mut props: prim::SwitchProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "pc-switch", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Switch { ..props }
    }
}

#[component]
pub fn SwitchThumb(mut props: prim::SwitchThumbProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "pc-switch-thumb", None, false));

    rsx! {
        prim::SwitchThumb { ..props }
    }
}
