use serde::{Deserialize, Serialize};

/// Loader payload for the resume route. Built fresh per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeData {
    pub skills: Vec<String>,
}

impl ResumeData {
    /// Skills in declaration order, joined the way the page displays them.
    pub fn skills_line(&self) -> String {
        self.skills.join(", ")
    }
}
