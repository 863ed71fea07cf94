use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBriefcase, LdLayoutDashboard, LdSettings, LdUser};
use dioxus_free_icons::Icon;
use shared_ui::{
    Sidebar, SidebarContent, SidebarGroupLabel, SidebarHeader, SidebarMenu, SidebarMenuButton,
    SidebarMenuItem, SidebarSeparator,
};

use crate::route_table::{
    descriptors_for, normalize_path, path_within, LayoutNamespace, PageId, RouteDescriptor,
    DEFAULT_BRAND,
};
use crate::routes::Route;

/// Sidebar sections, in display order.
const SECTIONS: &[(&str, LayoutNamespace)] = &[
    ("Admin", LayoutNamespace::Admin),
    ("Client", LayoutNamespace::Client),
];

fn is_active(current_path: &str, descriptor: &RouteDescriptor) -> bool {
    path_within(&normalize_path(current_path), &descriptor.full_path())
}

fn page_icon(page: PageId) -> Element {
    match page {
        PageId::AdminSettings => rsx! { Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 } },
        PageId::ClientProfile | PageId::UserProfile => {
            rsx! { Icon::<LdUser> { icon: LdUser, width: 18, height: 18 } }
        }
        PageId::ClientDashboard => {
            rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 } }
        }
        _ => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
    }
}

/// Sidebar for the client shell, generated from the route table.
#[component]
pub fn AppSidebar(current_path: String) -> Element {
    rsx! {
        Sidebar {
            SidebarHeader {
                div { class: "sidebar-brand",
                    span { class: "sidebar-brand-name", "{DEFAULT_BRAND}" }
                }
            }

            SidebarSeparator {}

            SidebarContent {
                for (label, namespace) in SECTIONS.iter().copied() {
                    div { key: "{label}", class: "sidebar-group",
                        SidebarGroupLabel { "{label}" }
                        SidebarMenu {
                            for descriptor in descriptors_for(namespace) {
                                SidebarMenuItem {
                                    key: "{descriptor.page:?}",
                                    Link { to: Route::for_descriptor(descriptor),
                                        SidebarMenuButton { active: is_active(&current_path, descriptor),
                                            {page_icon(descriptor.page)}
                                            "{descriptor.display_name}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
