use uuid::Uuid;

use crate::config::Config;
use crate::render::ShellOptions;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    /// Changes on every process start; the live-reload script polls it.
    pub boot_id: Uuid,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            config,
            boot_id: Uuid::new_v4(),
        }
    }

    pub fn shell(&self) -> ShellOptions {
        ShellOptions {
            live_reload: self.config.app_env.is_development(),
        }
    }
}
