use dioxus::prelude::*;

mod api;
mod auth;
mod components;
mod dom;
mod forms;
mod route_table;
mod routes;
mod session;

use api_client::ApiClient;
use auth::PendingVerification;
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::logger::initialize_default();

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        let config = api_client::config::load_config();
        tracing::info!(api = %config.api.base_url, "serving PubCash admin");

        let router = dioxus::server::router(App)
            .layer(tower_http::trace::TraceLayer::new_for_http())
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = api_client::config::load_config();

    use_context_provider(|| session::platform_session(config));
    use_context_provider(|| ApiClient::from_config(config));
    use_context_provider(PendingVerification::new);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
