use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
    Json,
};

use crate::models::resume::ResumeData;
use crate::render::{escape, page};
use crate::state::AppState;

pub const RESUME_TITLE: &str = "Resume | Zhang Zhengzheng";

/// Query parameter that asks for the loader payload instead of the page.
pub const DATA_PARAM: &str = "_data";

/// Loader for the resume route. Order is display order.
pub fn load_resume() -> ResumeData {
    ResumeData {
        skills: [
            "JavaScript",
            "CSS/HTML",
            "React",
            "Vue",
            "Angular",
            "NodeJS",
            "Ruby",
            "PHP",
            "Perl",
            "Git",
            "Docker",
            "AWS",
            "Remix",
        ]
        .into_iter()
        .map(str::to_string)
        .collect(),
    }
}

pub fn render_resume(resume: &ResumeData) -> String {
    format!(
        "<div>\n<h1>Zhang Zhengzheng</h1>\n<p>A full-stack developer, Senior consultant, Freelancer.</p>\n<p class=\"skills\">{}</p>\n</div>",
        escape(&resume.skills_line())
    )
}

/// GET /resume
pub async fn resume_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let resume = load_resume();
    if params.contains_key(DATA_PARAM) {
        return Json(resume).into_response();
    }
    Html(page(RESUME_TITLE, &render_resume(&resume), &state.shell())).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_skill_order() {
        assert_eq!(
            load_resume().skills_line(),
            "JavaScript, CSS/HTML, React, Vue, Angular, NodeJS, Ruby, PHP, Perl, Git, Docker, AWS, Remix"
        );
    }

    #[test]
    fn test_loader_builds_fresh_data() {
        let mut first = load_resume();
        first.skills.clear();
        assert_eq!(load_resume().skills.len(), 13);
    }

    #[test]
    fn test_render_escapes_skills() {
        let html = render_resume(&load_resume());
        assert!(html.contains("<h1>Zhang Zhengzheng</h1>"));
        assert!(html.contains("JavaScript, CSS/HTML, React"));
        assert!(html.contains("Remix</p>"));
    }
}
