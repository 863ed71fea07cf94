//! Small document side effects run through `document::eval`.

use dioxus::prelude::*;
use std::time::Duration;

/// Jump back to the top of the page after a navigation.
pub fn scroll_to_top() {
    document::eval("window.scrollTo(0, 0);");
}

/// Wait on the JS event loop. Works the same on web, desktop and mobile
/// since all three render into a webview.
pub async fn sleep(delay: Duration) {
    let script = format!(
        "await new Promise((resolve) => setTimeout(resolve, {})); return true;",
        delay.as_millis()
    );
    if let Err(e) = document::eval(&script).await {
        tracing::debug!(error = ?e, "timer eval failed, continuing without delay");
    }
}

/// Reset the scroll position whenever `path` changes.
pub fn use_scroll_reset(path: String) {
    use_effect(use_reactive((&path,), |(path,)| {
        tracing::trace!(%path, "navigation, resetting scroll");
        scroll_to_top();
    }));
}
