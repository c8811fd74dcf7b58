use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::render::{escape, page, ShellOptions};

const UNAUTHORIZED_MESSAGE: &str =
    "Oops! Looks like you tried to visit a page that you do not have access to.";
const NOT_FOUND_MESSAGE: &str = "Oops! Looks like you tried to visit a page that does not exist.";

/// A non-success response signalled by a route instead of its normal output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaughtResponse {
    pub status: u16,
    pub status_text: String,
    pub data: Option<String>,
}

impl CaughtResponse {
    pub fn new(status: u16, status_text: impl Into<String>) -> Self {
        CaughtResponse {
            status,
            status_text: status_text.into(),
            data: None,
        }
    }

    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn not_found() -> Self {
        Self::new(404, "Not Found")
    }

    pub fn unauthorized() -> Self {
        Self::new(401, "Unauthorized")
    }

    /// Message carried into the error boundary when no page exists for this
    /// status: the response data if any, else the status text.
    pub fn escalation_message(&self) -> String {
        match self.data.as_deref() {
            Some(data) if !data.is_empty() => data.to_string(),
            _ => self.status_text.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatchKind {
    Unauthorized,
    NotFound,
    Other,
}

impl CatchKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            401 => CatchKind::Unauthorized,
            404 => CatchKind::NotFound,
            _ => CatchKind::Other,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoundaryError {
    /// The status has no page of its own; render the error boundary instead.
    #[error("{0}")]
    Escalated(String),
}

/// Renders the caught-response page for 401 and 404. Any other status escalates.
pub fn catch_boundary(caught: &CaughtResponse, opts: &ShellOptions) -> Result<String, BoundaryError> {
    let message = match CatchKind::from_status(caught.status) {
        CatchKind::Unauthorized => UNAUTHORIZED_MESSAGE,
        CatchKind::NotFound => NOT_FOUND_MESSAGE,
        CatchKind::Other => return Err(BoundaryError::Escalated(caught.escalation_message())),
    };

    let title = format!("{} {}", caught.status, caught.status_text);
    let content = format!(
        "<h1>{}: {}</h1>\n<p>{}</p>",
        caught.status,
        escape(&caught.status_text),
        message
    );
    Ok(page(&title, &content, opts))
}

/// Renders the generic failure page. The caller logs the error first.
pub fn error_boundary(message: &str, opts: &ShellOptions) -> String {
    let content = format!(
        "<div>\n<h1>There was an error</h1>\n<p>{}</p>\n<hr />\n<p>Something went wrong while rendering this page. Please try again later.</p>\n</div>",
        escape(message)
    );
    page("Error!", &content, opts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> ShellOptions {
        ShellOptions::default()
    }

    #[test]
    fn test_status_dispatch() {
        assert_eq!(CatchKind::from_status(401), CatchKind::Unauthorized);
        assert_eq!(CatchKind::from_status(404), CatchKind::NotFound);
        assert_eq!(CatchKind::from_status(403), CatchKind::Other);
        assert_eq!(CatchKind::from_status(500), CatchKind::Other);
    }

    #[test]
    fn test_not_found_page() {
        let html = catch_boundary(&CaughtResponse::not_found(), &opts()).unwrap();
        assert!(html.contains("<title>404 Not Found</title>"));
        assert!(html.contains("<h1>404: Not Found</h1>"));
        assert!(html.contains("does not exist"));
        assert!(!html.contains("do not have access"));
    }

    #[test]
    fn test_unauthorized_page() {
        let html = catch_boundary(&CaughtResponse::unauthorized(), &opts()).unwrap();
        assert!(html.contains("<title>401 Unauthorized</title>"));
        assert!(html.contains("401"));
        assert!(html.contains("do not have access"));
        assert!(!html.contains("does not exist"));
    }

    #[test]
    fn test_unmapped_status_escalates_with_status_text() {
        let caught = CaughtResponse::new(500, "Internal Server Error");
        let err = catch_boundary(&caught, &opts()).unwrap_err();
        assert_eq!(
            err,
            BoundaryError::Escalated("Internal Server Error".to_string())
        );
    }

    #[test]
    fn test_escalation_prefers_non_empty_data() {
        let caught = CaughtResponse::new(418, "I'm a teapot").with_data("short and stout");
        assert_eq!(caught.escalation_message(), "short and stout");

        let empty = CaughtResponse::new(418, "I'm a teapot").with_data("");
        assert_eq!(empty.escalation_message(), "I'm a teapot");
    }

    #[test]
    fn test_error_page_shows_raw_message() {
        let html = error_boundary("database <exploded>", &opts());
        assert!(html.contains("<title>Error!</title>"));
        assert!(html.contains("<h1>There was an error</h1>"));
        assert!(html.contains("database &lt;exploded&gt;"));
        // chrome stays in place during failures
        assert!(html.contains("Main navigation"));
    }
}
