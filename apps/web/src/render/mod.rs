//! Server-side HTML rendering: the document envelope every page shares, the
//! header/footer chrome, and the boundary pages that replace a failed route.

pub mod announcer;
pub mod boundary;

use std::fmt::Write;

use crate::render::announcer::RouteAnnouncer;

pub const SITE_OWNER: &str = "Zhengzheng Zhang";
pub const GITHUB_URL: &str = "https://github.com/tychio";

const LOGO_SVG: &str = include_str!("../../assets/logo.svg");

/// `<link>` attributes injected into every page head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StylesheetLink {
    pub href: &'static str,
    pub media: Option<&'static str>,
}

pub const STYLESHEETS: [StylesheetLink; 3] = [
    StylesheetLink {
        href: "/styles/global.css",
        media: None,
    },
    StylesheetLink {
        href: "/styles/dark.css",
        media: Some("(prefers-color-scheme: dark)"),
    },
    StylesheetLink {
        href: "/styles/site.css",
        media: None,
    },
];

pub const CLIENT_ENTRY_SRC: &str = "/build/entry.client.js";
pub const LIVE_RELOAD_SRC: &str = "/build/livereload.js";

/// Per-environment switches for the document envelope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellOptions {
    pub live_reload: bool,
}

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the full HTML document around already-rendered `body` markup.
///
/// The announcer is always rendered in its server state, which produces no
/// markup; the client bootstrap creates the live region after hydration.
pub fn document(title: Option<&str>, body: &str, opts: &ShellOptions) -> String {
    let mut html = String::with_capacity(body.len() + 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\n");
    if let Some(title) = title {
        let _ = writeln!(html, "<title>{}</title>", escape(title));
    }
    for link in STYLESHEETS {
        match link.media {
            Some(media) => {
                let _ = writeln!(
                    html,
                    "<link rel=\"stylesheet\" href=\"{}\" media=\"{}\">",
                    link.href,
                    escape(media)
                );
            }
            None => {
                let _ = writeln!(html, "<link rel=\"stylesheet\" href=\"{}\">", link.href);
            }
        }
    }
    html.push_str("</head>\n<body>\n");
    html.push_str(body);
    html.push('\n');
    if let Some(region) = RouteAnnouncer::new().render() {
        html.push_str(&region);
        html.push('\n');
    }
    let _ = writeln!(html, "<script src=\"{CLIENT_ENTRY_SRC}\" defer></script>");
    if opts.live_reload {
        let _ = writeln!(html, "<script src=\"{LIVE_RELOAD_SRC}\" defer></script>");
    }
    html.push_str("</body>\n</html>\n");
    html
}

/// Header, main content container and footer around `children`.
pub fn layout(children: &str) -> String {
    format!(
        r#"<div class="site">
<header class="site__header">
<div class="container site__header-content">
<a href="/" title="{owner}" class="site__header-home-link">{logo}</a>
<nav aria-label="Main navigation" class="site__header-nav">
<ul>
<li><a href="/">首页</a></li>
<li><a href="/resume">简历</a></li>
<li><a href="{github}">GitHub</a></li>
</ul>
</nav>
</div>
</header>
<div class="site__main">
<div class="container site__main-content" id="main-content">{children}</div>
</div>
<footer class="site__footer">
<div class="container site__footer-content">
<p>&copy; {owner}</p>
</div>
</footer>
</div>"#,
        owner = SITE_OWNER,
        logo = LOGO_SVG.trim(),
        github = GITHUB_URL,
        children = children,
    )
}

/// Shorthand for the common case of a routed page inside the layout.
pub fn page(title: &str, content: &str, opts: &ShellOptions) -> String {
    document(Some(title), &layout(content), opts)
}
