//! Navigation markup rendering and one-time page injection.

use super::links::{links_for, LinkStyle, NavTarget, LOGOUT_PATH};
use super::session::NavigationSession;

/// Attribute identifying injected navigation markup.
pub const NAV_MARKER: &str = "data-nolossform-nav";

const BRAND: &str = "NoLossForm";

/// Renders the navigation bar and its spacer for `session`.
pub fn render(session: &NavigationSession) -> String {
    let mut html = format!("<nav class=\"navbar\" {}>\n", NAV_MARKER);
    html.push_str("  <div class=\"nav-container\">\n");
    html.push_str(&format!("    <a href=\"/\" class=\"logo\">{}</a>\n", BRAND));
    html.push_str("    <div class=\"nav-links\">\n");

    for link in links_for(session) {
        let class = match link.style {
            LinkStyle::Plain => "nav-link",
            LinkStyle::CallToAction => "nav-link nav-cta",
        };
        let entry = match link.target {
            NavTarget::Href(href) => {
                format!("<a href=\"{}\" class=\"{}\">{}</a>", href, class, link.label)
            }
            NavTarget::Logout => format!(
                "<form method=\"post\" action=\"{}\" class=\"nav-logout\"><button type=\"submit\" class=\"{}\">{}</button></form>",
                LOGOUT_PATH, class, link.label
            ),
        };
        html.push_str(&format!("      {}\n", entry));
    }

    html.push_str("    </div>\n");
    html.push_str("  </div>\n");
    html.push_str("</nav>\n");
    html.push_str("<div class=\"nav-spacer\"></div>\n");
    html
}

/// Inserts the navigation at the start of the page body.
///
/// Pages that already carry the navigation are returned unchanged. Pages
/// without a `<body>` tag get the navigation prepended.
pub fn inject(page: &str, session: &NavigationSession) -> String {
    if page.contains(NAV_MARKER) {
        return page.to_string();
    }

    let nav = render(session);
    match body_content_start(page) {
        Some(at) => {
            let mut out = String::with_capacity(page.len() + nav.len());
            out.push_str(&page[..at]);
            out.push_str(&nav);
            out.push_str(&page[at..]);
            out
        }
        None => format!("{}{}", nav, page),
    }
}

/// Byte offset just past the opening `<body ...>` tag.
fn body_content_start(page: &str) -> Option<usize> {
    let lower = page.to_ascii_lowercase();
    let mut search_from = 0;

    while let Some(found) = lower[search_from..].find("<body") {
        let after = search_from + found + "<body".len();
        match lower.as_bytes().get(after) {
            Some(b'>') => return Some(after + 1),
            Some(c) if c.is_ascii_whitespace() || *c == b'/' => {
                return tag_end(&lower.as_bytes()[after..]).map(|end| after + end + 1);
            }
            _ => search_from = after,
        }
    }
    None
}

/// Index of the `>` closing a tag, ignoring any inside quoted attribute values.
fn tag_end(bytes: &[u8]) -> Option<usize> {
    let mut quote: Option<u8> = None;
    for (i, &b) in bytes.iter().enumerate() {
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None if b == b'"' || b == b'\'' => quote = Some(b),
            None if b == b'>' => return Some(i),
            None => {}
        }
    }
    None
}
