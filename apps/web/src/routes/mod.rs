pub mod assets;
pub mod health;
pub mod home;
pub mod livereload;
pub mod resume;

use std::any::Any;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::errors::{AppError, Boundary};
use crate::render::boundary::{catch_boundary, error_boundary, BoundaryError, CaughtResponse};
use crate::state::AppState;

async fn not_found() -> AppError {
    AppError::not_found()
}

pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(home::home_handler))
        .route("/resume", get(resume::resume_handler))
        .route("/health", get(health::health_handler))
        .route("/styles/global.css", get(assets::global_css_handler))
        .route("/styles/dark.css", get(assets::dark_css_handler))
        .route("/styles/site.css", get(assets::site_css_handler))
        .route("/build/entry.client.js", get(assets::entry_client_handler));

    if state.config.app_env.is_development() {
        router = router
            .route("/__livereload", get(livereload::live_reload_handler))
            .route(
                "/build/livereload.js",
                get(assets::live_reload_script_handler),
            );
    }

    router
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            render_boundaries,
        ))
        .with_state(state)
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "Unknown panic".to_string()
    };
    AppError::Panic(message).into_response()
}

/// Replaces failed route output with the catch or error boundary page.
///
/// Error statuses produced outside our handlers (method not allowed, extractor
/// rejections) carry no boundary and are treated as caught responses.
async fn render_boundaries(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let status = response.status();

    let boundary = match response.extensions_mut().remove::<Boundary>() {
        Some(boundary) => boundary,
        None if status.is_client_error() || status.is_server_error() => {
            Boundary::Caught(CaughtResponse::new(
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown Status"),
            ))
        }
        None => return response,
    };

    let opts = state.shell();
    match boundary {
        Boundary::Caught(caught) => match catch_boundary(&caught, &opts) {
            Ok(html) => (status, Html(html)).into_response(),
            Err(BoundaryError::Escalated(message)) => {
                tracing::error!(status = caught.status, "Unhandled response status: {message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(error_boundary(&message, &opts)),
                )
                    .into_response()
            }
        },
        Boundary::Error(message) => (status, Html(error_boundary(&message, &opts))).into_response(),
    }
}
