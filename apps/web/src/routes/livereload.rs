use axum::{extract::State, Json};
use serde::Serialize;
use uuid::Uuid;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct LiveReloadStatus {
    pub boot_id: Uuid,
}

/// GET /__livereload
/// The browser reloads when the boot id it sees changes, i.e. after a restart.
pub async fn live_reload_handler(State(state): State<AppState>) -> Json<LiveReloadStatus> {
    Json(LiveReloadStatus {
        boot_id: state.boot_id,
    })
}
