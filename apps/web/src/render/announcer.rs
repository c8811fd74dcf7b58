//! Screen-reader announcement of client-side route changes.
//!
//! The browser bootstrap (`assets/build/entry.client.js`) runs the same
//! transitions; this type is the reference model and the server-side renderer.

use crate::render::escape;

pub const REGION_ID: &str = "route-change-region";

/// Inline style that removes the region from layout while keeping it in the
/// accessibility tree.
pub const VISUALLY_HIDDEN_STYLE: &str = "border: 0; clip-path: inset(100%); \
clip: rect(0 0 0 0); height: 1px; margin: -1px; overflow: hidden; padding: 0; \
position: absolute; width: 1px; white-space: nowrap; word-wrap: normal";

const HOME_LABEL: &str = "Home page";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnouncerState {
    /// Server render or before the first client mount.
    NotHydrated,
    /// Mounted; the initial location has not been observed yet.
    Mounted,
    /// Initial location observed, nothing announced.
    Settled { path: String },
    Announced { path: String, message: String },
}

#[derive(Debug, Clone)]
pub struct RouteAnnouncer {
    state: AnnouncerState,
}

impl Default for RouteAnnouncer {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteAnnouncer {
    pub fn new() -> Self {
        RouteAnnouncer {
            state: AnnouncerState::NotHydrated,
        }
    }

    pub fn state(&self) -> &AnnouncerState {
        &self.state
    }

    pub fn is_hydrated(&self) -> bool {
        !matches!(self.state, AnnouncerState::NotHydrated)
    }

    pub fn message(&self) -> Option<&str> {
        match &self.state {
            AnnouncerState::Announced { message, .. } => Some(message),
            _ => None,
        }
    }

    /// One-time hydration. Later calls are no-ops.
    pub fn mount(&mut self) {
        if self.state == AnnouncerState::NotHydrated {
            self.state = AnnouncerState::Mounted;
        }
    }

    /// Observes the current location. The first observation after mount is
    /// the initial page load and is never announced.
    pub fn navigate(&mut self, path: &str, document_title: &str) {
        let next = match &self.state {
            AnnouncerState::NotHydrated => return,
            AnnouncerState::Mounted => AnnouncerState::Settled {
                path: path.to_string(),
            },
            AnnouncerState::Settled { path: last } | AnnouncerState::Announced { path: last, .. } => {
                if last == path {
                    return;
                }
                AnnouncerState::Announced {
                    path: path.to_string(),
                    message: announcement_for(path, document_title),
                }
            }
        };
        self.state = next;
    }

    /// Live-region markup, or `None` before hydration.
    pub fn render(&self) -> Option<String> {
        if !self.is_hydrated() {
            return None;
        }
        Some(format!(
            r#"<div aria-live="assertive" aria-atomic="true" id="{REGION_ID}" style="{VISUALLY_HIDDEN_STYLE}">{}</div>"#,
            escape(self.message().unwrap_or_default())
        ))
    }
}

/// The text read out after navigating to `path`.
pub fn announcement_for(path: &str, document_title: &str) -> String {
    let label = if path == "/" { HOME_LABEL } else { document_title };
    format!("Navigated to {label}")
}
