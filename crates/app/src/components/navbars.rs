use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdLogOut;
use dioxus_free_icons::Icon;
use shared_ui::{
    use_toast, Button, ButtonVariant, Navbar, NavbarActions, NavbarBrand, ToastOptions,
};

use crate::auth::{use_session, LOGIN_PATH};
use crate::route_table::{descriptors_for, LayoutNamespace, PageId, DEFAULT_BRAND};
use crate::routes::Route;
use crate::session::SessionProvider;

/// Drop the stored token and return where to go next.
pub fn sign_out(session: &dyn SessionProvider) -> Route {
    session.clear();
    tracing::info!("signed out");
    Route::from_path(LOGIN_PATH)
}

/// Navbar over the sign-in pages.
#[component]
pub fn AuthNavbar() -> Element {
    rsx! {
        Navbar {
            NavbarBrand { text: DEFAULT_BRAND.to_string() }
            NavbarActions {
                Link { to: Route::page(PageId::Login), class: "navbar-link", "Sign in" }
                Link { to: Route::page(PageId::Register), class: "navbar-link", "Create account" }
            }
        }
    }
}

/// Navbar for the admin and client areas. `brand` is derived from the URL by
/// the layout.
#[component]
pub fn AdminNavbar(brand: String) -> Element {
    let session = use_session();
    let toast = use_toast();

    rsx! {
        Navbar {
            NavbarBrand { text: brand }
            NavbarActions {
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| {
                        let target = sign_out(&*session);
                        toast.info("You have been signed out".to_string(), ToastOptions::new());
                        navigator().replace(target);
                    },
                    Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                    "Log out"
                }
            }
        }
    }
}

/// Navbar for the public user area, linking every user page.
#[component]
pub fn UserNavbar() -> Element {
    rsx! {
        Navbar {
            NavbarBrand { text: DEFAULT_BRAND.to_string() }
            NavbarActions {
                for descriptor in descriptors_for(LayoutNamespace::User) {
                    Link {
                        key: "{descriptor.page:?}",
                        to: Route::for_descriptor(descriptor),
                        class: "navbar-link",
                        "{descriptor.display_name}"
                    }
                }
            }
        }
    }
}
