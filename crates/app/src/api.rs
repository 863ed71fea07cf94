use api_client::ApiClient;
use dioxus::prelude::*;

use crate::auth::use_session;

/// API client carrying the current session token, if any.
///
/// The base client lives in context so every view shares one connection pool.
pub fn use_api() -> ApiClient {
    let base = use_context::<ApiClient>();
    let session = use_session();
    base.with_token(session.get())
}
