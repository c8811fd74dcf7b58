use axum::{extract::State, response::Html};

use crate::render::{page, SITE_OWNER};
use crate::state::AppState;

pub const HOME_TITLE: &str = "Zhang Zhengzheng";

/// GET /
pub async fn home_handler(State(state): State<AppState>) -> Html<String> {
    let content = format!(
        r#"<div class="home">
<h1>Hi, I'm {SITE_OWNER}.</h1>
<p>A full-stack developer, senior consultant and freelancer.</p>
<p>Have a look at my <a href="/resume">resume</a> or my work on <a href="{github}">GitHub</a>.</p>
</div>"#,
        github = crate::render::GITHUB_URL,
    );
    Html(page(HOME_TITLE, &content, &state.shell()))
}
