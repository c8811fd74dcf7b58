use axum::{
    http::header,
    response::{IntoResponse, Response},
};

const GLOBAL_CSS: &str = include_str!("../../assets/styles/global.css");
const DARK_CSS: &str = include_str!("../../assets/styles/dark.css");
const SITE_CSS: &str = include_str!("../../assets/styles/site.css");
const ENTRY_CLIENT_JS: &str = include_str!("../../assets/build/entry.client.js");
const LIVE_RELOAD_JS: &str = include_str!("../../assets/build/livereload.js");

const CSS: &str = "text/css; charset=utf-8";
const JS: &str = "text/javascript; charset=utf-8";

fn asset(content_type: &'static str, body: &'static str) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type),
            (header::CACHE_CONTROL, "public, max-age=60"),
        ],
        body,
    )
        .into_response()
}

/// GET /styles/global.css
pub async fn global_css_handler() -> Response {
    asset(CSS, GLOBAL_CSS)
}

/// GET /styles/dark.css
pub async fn dark_css_handler() -> Response {
    asset(CSS, DARK_CSS)
}

/// GET /styles/site.css
pub async fn site_css_handler() -> Response {
    asset(CSS, SITE_CSS)
}

/// GET /build/entry.client.js
pub async fn entry_client_handler() -> Response {
    asset(JS, ENTRY_CLIENT_JS)
}

/// GET /build/livereload.js (development only)
pub async fn live_reload_script_handler() -> Response {
    asset(JS, LIVE_RELOAD_JS)
}
