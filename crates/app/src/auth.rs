use dioxus::prelude::*;

use crate::route_table::LayoutNamespace;
use crate::session::{SessionHandle, SessionProvider};

/// Where the guard sends signed-out visitors.
pub const LOGIN_PATH: &str = "/auth/login";

/// Outcome of checking a guarded namespace against the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

/// Pass through when a token is stored, otherwise redirect to login.
pub fn guard_decision(session: &dyn SessionProvider) -> GuardDecision {
    if session.is_authenticated() {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(LOGIN_PATH)
    }
}

/// Decision for the current render of the guard.
///
/// `None` until the first check has run after mount, so server rendering and
/// hydration agree. From then on the session is read on every render, so a
/// token cleared elsewhere is seen before the next guarded page mounts.
pub fn render_decision(checked: bool, session: &dyn SessionProvider) -> Option<GuardDecision> {
    checked.then(|| guard_decision(session))
}

/// Guard decision for an arbitrary namespace. Unguarded namespaces always pass.
pub fn namespace_access(namespace: LayoutNamespace, session: &dyn SessionProvider) -> GuardDecision {
    if namespace.requires_session() {
        guard_decision(session)
    } else {
        GuardDecision::Allow
    }
}

/// Email awaiting OTP confirmation, set by the login view and read by the
/// verification view.
#[derive(Clone, Copy)]
pub struct PendingVerification {
    pub email: Signal<Option<String>>,
}

impl PendingVerification {
    pub fn new() -> Self {
        Self {
            email: Signal::new(None),
        }
    }
}

/// Hook to access the session provider.
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}

pub fn use_pending_verification() -> PendingVerification {
    use_context::<PendingVerification>()
}
