//! Static route table shared by every layout shell.
//!
//! Each [`RouteDescriptor`] binds a path inside a [`LayoutNamespace`] to a
//! [`PageId`]. Shells never hold component references; they look pages up
//! here and hand the id to the registry in `routes`.

use std::sync::OnceLock;

/// Brand text shown when no descriptor matches the current path.
pub const DEFAULT_BRAND: &str = "PubCash";

/// URL namespace a descriptor lives under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutNamespace {
    Auth,
    Admin,
    Client,
    User,
}

/// The three layout shells. Admin and Client pages share the same chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Auth,
    Client,
    User,
}

pub const ALL_NAMESPACES: &[LayoutNamespace] = &[
    LayoutNamespace::Auth,
    LayoutNamespace::Admin,
    LayoutNamespace::Client,
    LayoutNamespace::User,
];

impl LayoutNamespace {
    /// URL prefix, e.g. `/admin`.
    pub fn prefix(&self) -> &'static str {
        match self {
            LayoutNamespace::Auth => "/auth",
            LayoutNamespace::Admin => "/admin",
            LayoutNamespace::Client => "/client",
            LayoutNamespace::User => "/user",
        }
    }

    pub fn shell(&self) -> Shell {
        match self {
            LayoutNamespace::Auth => Shell::Auth,
            LayoutNamespace::Admin | LayoutNamespace::Client => Shell::Client,
            LayoutNamespace::User => Shell::User,
        }
    }

    /// Path (relative to the prefix) unmatched URLs fall back to.
    pub fn landing_path(&self) -> &'static str {
        match self {
            LayoutNamespace::Auth => "/login",
            LayoutNamespace::Admin | LayoutNamespace::Client | LayoutNamespace::User => {
                "/dashboard"
            }
        }
    }

    /// Whether the guard must see a session token before this namespace renders.
    pub fn requires_session(&self) -> bool {
        self.shell() == Shell::Client
    }

    /// Namespace owning a full URL path, by prefix.
    pub fn from_url(url: &str) -> Option<Self> {
        let path = normalize_path(url);
        ALL_NAMESPACES.iter().copied().find(|ns| {
            let prefix = ns.prefix();
            path == prefix || path.starts_with(&format!("{prefix}/"))
        })
    }
}

/// Every page the application can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    Login,
    Register,
    VerifyOtp,
    AdminDashboard,
    AdminSettings,
    ClientDashboard,
    ClientProfile,
    UserDashboard,
    UserProfile,
}

/// Static record binding a URL path to a page and a namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// Path below the namespace prefix, always starting with `/`.
    pub path: &'static str,
    pub namespace: LayoutNamespace,
    pub display_name: &'static str,
    pub page: PageId,
}

impl RouteDescriptor {
    const fn new(
        namespace: LayoutNamespace,
        path: &'static str,
        display_name: &'static str,
        page: PageId,
    ) -> Self {
        Self {
            path,
            namespace,
            display_name,
            page,
        }
    }

    /// Prefix and path joined, e.g. `/admin/settings`.
    pub fn full_path(&self) -> String {
        format!("{}{}", self.namespace.prefix(), self.path)
    }
}

/// Ordered route table. Paths are unique within a namespace.
pub static ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor::new(LayoutNamespace::Auth, "/login", "Login", PageId::Login),
    RouteDescriptor::new(LayoutNamespace::Auth, "/register", "Register", PageId::Register),
    RouteDescriptor::new(LayoutNamespace::Auth, "/verify-otp", "Verify OTP", PageId::VerifyOtp),
    RouteDescriptor::new(LayoutNamespace::Admin, "/dashboard", "Dashboard", PageId::AdminDashboard),
    RouteDescriptor::new(LayoutNamespace::Admin, "/settings", "Settings", PageId::AdminSettings),
    RouteDescriptor::new(LayoutNamespace::Client, "/dashboard", "Client Dashboard", PageId::ClientDashboard),
    RouteDescriptor::new(LayoutNamespace::Client, "/profile", "Client Profile", PageId::ClientProfile),
    RouteDescriptor::new(LayoutNamespace::User, "/dashboard", "User Dashboard", PageId::UserDashboard),
    RouteDescriptor::new(LayoutNamespace::User, "/profile", "User Profile", PageId::UserProfile),
];

/// Strip query string, fragment and trailing slashes. The empty path becomes `/`.
pub fn normalize_path(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// True when `path` is `base` or a descendant of it. Both must be normalized.
pub fn path_within(path: &str, base: &str) -> bool {
    path == base
        || path
            .strip_prefix(base)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Path below a namespace prefix, rebuilt from catch-all route segments.
pub fn path_from_segments(segments: &[String]) -> String {
    let joined = segments
        .iter()
        .filter(|s| !s.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("/");
    format!("/{joined}")
}

/// Descriptors rendered by a namespace, in table order.
pub fn descriptors_for(namespace: LayoutNamespace) -> impl Iterator<Item = &'static RouteDescriptor> {
    ROUTES.iter().filter(move |d| d.namespace == namespace)
}

/// Descriptors rendered inside a shell, in table order.
pub fn descriptors_for_shell(shell: Shell) -> impl Iterator<Item = &'static RouteDescriptor> {
    ROUTES.iter().filter(move |d| d.namespace.shell() == shell)
}

/// Descriptor registered for `path` within `namespace`, if any.
pub fn resolve(namespace: LayoutNamespace, path: &str) -> Option<&'static RouteDescriptor> {
    let path = normalize_path(path);
    descriptors_for(namespace).find(|d| d.path == path)
}

/// Descriptor a namespace falls back to for unmatched paths.
pub fn landing(namespace: LayoutNamespace) -> Option<&'static RouteDescriptor> {
    resolve(namespace, namespace.landing_path())
}

/// Longest-prefix index from full URL paths to display names.
///
/// A descriptor matches when the current path equals its full path or
/// continues it past a `/`, so `/admin/settings` never matches
/// `/admin/settings-archive`.
#[derive(Debug, Clone)]
pub struct BrandIndex {
    /// Sorted longest full path first.
    entries: Vec<(String, &'static str)>,
}

impl BrandIndex {
    pub fn new(routes: &[RouteDescriptor]) -> Self {
        let mut entries: Vec<(String, &'static str)> = routes
            .iter()
            .map(|d| (d.full_path(), d.display_name))
            .collect();
        // Stable sort keeps table order among equal lengths.
        entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        Self { entries }
    }

    /// Display name of the longest descriptor path prefixing `current_path`.
    pub fn lookup(&self, current_path: &str) -> Option<&'static str> {
        let path = normalize_path(current_path);
        self.entries
            .iter()
            .find(|(full, _)| path_within(&path, full))
            .map(|(_, name)| *name)
    }

    /// Brand text for the navbar, falling back to [`DEFAULT_BRAND`].
    pub fn brand_text(&self, current_path: &str) -> &'static str {
        self.lookup(current_path).unwrap_or(DEFAULT_BRAND)
    }
}

/// Index over [`ROUTES`], built on first use.
pub fn brand_index() -> &'static BrandIndex {
    static INDEX: OnceLock<BrandIndex> = OnceLock::new();
    INDEX.get_or_init(|| BrandIndex::new(ROUTES))
}
