pub mod admin;
pub mod auth;
pub mod client;
pub mod not_found;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;

use chrono::Datelike;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdMenu;
use dioxus_free_icons::Icon;
use shared_ui::{Footer, SidebarInset, SidebarProvider, SidebarTrigger};

use crate::auth::{guard_decision, render_decision, use_session, GuardDecision};
use crate::components::{AdminNavbar, AppSidebar, AuthNavbar, UserNavbar};
use crate::dom::use_scroll_reset;
use crate::route_table::{
    self, brand_index, normalize_path, path_from_segments, LayoutNamespace, PageId,
    RouteDescriptor, ROUTES,
};

use not_found::NotFound;

/// Application routes.
///
/// Each namespace is a single catch-all; the shell looks the remaining path
/// up in [`ROUTES`] instead of the router knowing about individual pages.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Root {},

    #[nest("/auth")]
        #[layout(AuthLayout)]
            #[route("/:..segments")]
            AuthPage { segments: Vec<String> },
        #[end_layout]
    #[end_nest]

    #[layout(AuthGuard)]
        #[layout(ClientLayout)]
            #[nest("/admin")]
                #[route("/:..segments")]
                AdminPage { segments: Vec<String> },
            #[end_nest]
            #[nest("/client")]
                #[route("/:..segments")]
                ClientPage { segments: Vec<String> },
            #[end_nest]
        #[end_layout]
    #[end_layout]

    #[nest("/user")]
        #[layout(UserLayout)]
            #[route("/:..segments")]
            UserPage { segments: Vec<String> },
        #[end_layout]
    #[end_nest]

    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Route for `path` (relative to the namespace prefix) inside `namespace`.
    pub fn at(namespace: LayoutNamespace, path: &str) -> Self {
        let segments: Vec<String> = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        match namespace {
            LayoutNamespace::Auth => Route::AuthPage { segments },
            LayoutNamespace::Admin => Route::AdminPage { segments },
            LayoutNamespace::Client => Route::ClientPage { segments },
            LayoutNamespace::User => Route::UserPage { segments },
        }
    }

    pub fn for_descriptor(descriptor: &RouteDescriptor) -> Self {
        Self::at(descriptor.namespace, descriptor.path)
    }

    /// Route rendering `page`.
    pub fn page(page: PageId) -> Self {
        ROUTES
            .iter()
            .find(|d| d.page == page)
            .map(Self::for_descriptor)
            .unwrap_or(Route::Root {})
    }

    /// Landing page of a namespace.
    pub fn landing(namespace: LayoutNamespace) -> Self {
        Self::at(namespace, namespace.landing_path())
    }

    /// Route for a full URL path such as `/auth/login`.
    pub fn from_path(path: &str) -> Self {
        let path = normalize_path(path);
        match LayoutNamespace::from_url(&path) {
            Some(ns) => Self::at(ns, &path[ns.prefix().len()..]),
            None if path == "/" => Route::Root {},
            None => Route::NotFound {
                route: path
                    .split('/')
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
            },
        }
    }

    /// Namespace and remaining segments for shell routes.
    pub fn shell_target(&self) -> Option<(LayoutNamespace, &[String])> {
        match self {
            Route::AuthPage { segments } => Some((LayoutNamespace::Auth, segments)),
            Route::AdminPage { segments } => Some((LayoutNamespace::Admin, segments)),
            Route::ClientPage { segments } => Some((LayoutNamespace::Client, segments)),
            Route::UserPage { segments } => Some((LayoutNamespace::User, segments)),
            Route::Root {} | Route::NotFound { .. } => None,
        }
    }
}

/// What a shell shows for the path below its namespace prefix.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellResolution {
    Page(&'static RouteDescriptor),
    /// Nothing registered; go to the namespace landing page.
    Fallback(Route),
}

pub fn resolve_shell(namespace: LayoutNamespace, segments: &[String]) -> ShellResolution {
    let path = path_from_segments(segments);
    match route_table::resolve(namespace, &path) {
        Some(descriptor) => ShellResolution::Page(descriptor),
        None => ShellResolution::Fallback(Route::landing(namespace)),
    }
}

/// Registry from page ids to components.
fn render_page(page: PageId) -> Element {
    match page {
        PageId::Login => rsx! { auth::login::Login {} },
        PageId::Register => rsx! { auth::register::Register {} },
        PageId::VerifyOtp => rsx! { auth::verify_otp::VerifyOtp {} },
        PageId::AdminDashboard => rsx! { admin::dashboard::AdminDashboard {} },
        PageId::AdminSettings => rsx! { admin::settings::AdminSettings {} },
        PageId::ClientDashboard => rsx! { client::ClientDashboard {} },
        PageId::ClientProfile => rsx! { client::ClientProfile {} },
        PageId::UserDashboard => rsx! { user::UserDashboard {} },
        PageId::UserProfile => rsx! { user::UserProfile {} },
    }
}

/// Renders the descriptor matching `segments`, or redirects to the
/// namespace landing page when nothing matches.
#[component]
fn ShellPage(namespace: LayoutNamespace, segments: Vec<String>) -> Element {
    use_effect(use_reactive((&segments,), move |(segments,)| {
        if let ShellResolution::Fallback(target) = resolve_shell(namespace, &segments) {
            tracing::info!(
                namespace = namespace.prefix(),
                path = %path_from_segments(&segments),
                to = %target,
                "no page registered, redirecting to landing page"
            );
            navigator().replace(target);
        }
    }));

    match resolve_shell(namespace, &segments) {
        ShellResolution::Page(descriptor) => rsx! {
            document::Title { "{descriptor.display_name} | PubCash" }
            {render_page(descriptor.page)}
        },
        ShellResolution::Fallback(_) => rsx! {},
    }
}

#[component]
fn AuthPage(segments: Vec<String>) -> Element {
    rsx! { ShellPage { namespace: LayoutNamespace::Auth, segments } }
}

#[component]
fn AdminPage(segments: Vec<String>) -> Element {
    rsx! { ShellPage { namespace: LayoutNamespace::Admin, segments } }
}

#[component]
fn ClientPage(segments: Vec<String>) -> Element {
    rsx! { ShellPage { namespace: LayoutNamespace::Client, segments } }
}

#[component]
fn UserPage(segments: Vec<String>) -> Element {
    rsx! { ShellPage { namespace: LayoutNamespace::User, segments } }
}

/// `/` goes straight to the admin dashboard.
#[component]
fn Root() -> Element {
    use_effect(|| {
        navigator().replace(Route::page(PageId::AdminDashboard));
    });

    rsx! {
        div { class: "auth-guard-loading",
            p { "Loading..." }
        }
    }
}

/// Auth guard layout: redirects to login when no session token is stored.
///
/// The first check runs in an effect, so server rendering (which cannot see
/// browser storage) and the first client render both show the loading
/// state. After that every render reads the session directly.
#[component]
fn AuthGuard() -> Element {
    let session = use_session();
    let current = use_route::<Route>().to_string();
    let mut checked = use_signal(|| false);

    let effect_session = session.clone();
    use_effect(use_reactive((&current,), move |(current,)| {
        if let GuardDecision::Redirect(to) = guard_decision(&*effect_session) {
            tracing::info!(path = %current, to, "no session token, redirecting to login");
            navigator().replace(Route::from_path(to));
        }
        checked.set(true);
    }));

    let decision = render_decision(checked(), &*session);

    rsx! {
        GuardGate { decision, Outlet::<Route> {} }
    }
}

/// Renders `children` only when the guard allows it.
#[component]
fn GuardGate(decision: Option<GuardDecision>, children: Element) -> Element {
    match decision {
        Some(GuardDecision::Allow) => children,
        Some(GuardDecision::Redirect(_)) => rsx! {
            div { class: "auth-guard-loading",
                p { "Redirecting to login..." }
            }
        },
        None => rsx! {
            div { class: "auth-guard-loading",
                p { "Loading..." }
            }
        },
    }
}

fn current_year() -> i32 {
    chrono::Utc::now().year()
}

/// Chrome for the sign-in pages: light navbar, no sidebar.
#[component]
fn AuthLayout() -> Element {
    let current = use_route::<Route>().to_string();
    use_scroll_reset(current);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "auth-shell",
            AuthNavbar {}
            main { class: "auth-shell-content",
                Outlet::<Route> {}
            }
            Footer { year: current_year(), transparent: true }
        }
    }
}

/// Chrome for the admin and client areas: sidebar, navbar with brand text.
#[component]
fn ClientLayout() -> Element {
    let current = use_route::<Route>().to_string();
    let brand = brand_index().brand_text(&current);
    use_scroll_reset(current.clone());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { default_open: false,
            AppSidebar { current_path: current }
            SidebarInset {
                div { class: "client-shell-topbar",
                    SidebarTrigger {
                        Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
                    }
                    AdminNavbar { brand: brand.to_string() }
                }
                div { class: "client-shell-content",
                    Outlet::<Route> {}
                }
                Footer { year: current_year() }
            }
        }
    }
}

/// Chrome for the public user area.
#[component]
fn UserLayout() -> Element {
    let current = use_route::<Route>().to_string();
    use_scroll_reset(current);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "user-shell",
            UserNavbar {}
            main { class: "user-shell-content",
                Outlet::<Route> {}
            }
            Footer { year: current_year() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{namespace_access, LOGIN_PATH};
    use crate::session::{MemorySession, SessionProvider};
    use pretty_assertions::assert_eq;

    /// What the router, guard and shells together do for a URL.
    #[derive(Debug, PartialEq)]
    enum Navigation {
        Render(PageId),
        Redirect(Route),
        NotFound,
    }

    fn navigate(url: &str, session: &dyn SessionProvider) -> Navigation {
        let route: Route = match url.parse() {
            Ok(route) => route,
            Err(_) => return Navigation::NotFound,
        };
        match &route {
            Route::Root {} => Navigation::Redirect(Route::page(PageId::AdminDashboard)),
            Route::NotFound { .. } => Navigation::NotFound,
            _ => {
                let (namespace, segments) = route.shell_target().expect("shell route");
                if let GuardDecision::Redirect(to) = namespace_access(namespace, session) {
                    return Navigation::Redirect(Route::from_path(to));
                }
                match resolve_shell(namespace, segments) {
                    ShellResolution::Page(d) => Navigation::Render(d.page),
                    ShellResolution::Fallback(target) => Navigation::Redirect(target),
                }
            }
        }
    }

    fn signed_in() -> MemorySession {
        MemorySession::with_token("jwt-token")
    }

    #[test]
    fn every_descriptor_url_renders_its_page() {
        let session = signed_in();
        for d in ROUTES {
            assert_eq!(
                navigate(&d.full_path(), &session),
                Navigation::Render(d.page),
                "{}",
                d.full_path()
            );
        }
    }

    #[test]
    fn route_display_round_trips_descriptor_paths() {
        for d in ROUTES {
            assert_eq!(Route::for_descriptor(d).to_string(), d.full_path());
            assert_eq!(Route::from_path(&d.full_path()), Route::for_descriptor(d));
        }
    }

    #[test]
    fn unmatched_paths_fall_back_to_namespace_landing() {
        let session = signed_in();
        let cases = [
            ("/auth/nope", "/auth/login"),
            ("/admin/unknown/deep", "/admin/dashboard"),
            ("/client/settings", "/client/dashboard"),
            ("/user/settings", "/user/dashboard"),
        ];
        for (url, landing) in cases {
            assert_eq!(
                navigate(url, &session),
                Navigation::Redirect(Route::from_path(landing)),
                "{url}"
            );
        }
    }

    #[test]
    fn guarded_paths_redirect_to_login_without_token() {
        let session = MemorySession::default();
        for url in ["/admin/dashboard", "/admin/settings", "/client/profile", "/client/anything"] {
            assert_eq!(
                navigate(url, &session),
                Navigation::Redirect(Route::from_path(LOGIN_PATH)),
                "{url}"
            );
        }
    }

    #[test]
    fn guarded_paths_render_with_token() {
        let session = signed_in();
        assert_eq!(
            navigate("/admin/settings", &session),
            Navigation::Render(PageId::AdminSettings)
        );
        assert_eq!(
            navigate("/client/profile", &session),
            Navigation::Render(PageId::ClientProfile)
        );
    }

    #[test]
    fn public_namespaces_render_without_token() {
        let session = MemorySession::default();
        assert_eq!(navigate("/auth/register", &session), Navigation::Render(PageId::Register));
        assert_eq!(navigate("/user/profile", &session), Navigation::Render(PageId::UserProfile));
    }

    #[test]
    fn root_redirects_to_admin_dashboard() {
        assert_eq!(
            navigate("/", &MemorySession::default()),
            Navigation::Redirect(Route::AdminPage {
                segments: vec!["dashboard".to_string()]
            })
        );
    }

    #[test]
    fn unknown_top_level_path_is_not_found() {
        assert_eq!(navigate("/pricing", &signed_in()), Navigation::NotFound);
        assert_eq!(
            Route::from_path("/pricing/plans"),
            Route::NotFound {
                route: vec!["pricing".to_string(), "plans".to_string()]
            }
        );
    }

    #[test]
    fn page_lookup_matches_descriptor() {
        assert_eq!(Route::page(PageId::VerifyOtp).to_string(), "/auth/verify-otp");
        assert_eq!(Route::landing(LayoutNamespace::User).to_string(), "/user/dashboard");
    }

    fn render_gate(decision: Option<GuardDecision>) -> String {
        dioxus_ssr::render_element(rsx! {
            GuardGate { decision,
                p { "maintenance switch" }
            }
        })
    }

    #[test]
    fn guard_never_shows_guarded_page_after_token_is_cleared() {
        let session = signed_in();

        let before_check = render_decision(false, &session);
        assert_eq!(before_check, None);
        let html = render_gate(before_check);
        assert!(html.contains("Loading..."));
        assert!(!html.contains("maintenance switch"));

        let allowed = render_decision(true, &session);
        assert_eq!(allowed, Some(GuardDecision::Allow));
        assert!(render_gate(allowed).contains("maintenance switch"));

        // Token removed outside the app, then the sidebar moves to another page.
        session.clear();
        let next_page = render_decision(true, &session);
        assert_eq!(next_page, Some(GuardDecision::Redirect(LOGIN_PATH)));
        let html = render_gate(next_page);
        assert!(html.contains("Redirecting to login..."));
        assert!(!html.contains("maintenance switch"));
    }
}
