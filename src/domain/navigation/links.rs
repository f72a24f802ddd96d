//! The two static link sets.

use super::session::NavigationSession;

/// Path that performs logout when posted to.
pub const LOGOUT_PATH: &str = "/logout";

/// What a navigation entry does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Href(&'static str),
    Logout,
}

/// Visual weight of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStyle {
    Plain,
    CallToAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: NavTarget,
    pub style: LinkStyle,
}

impl NavLink {
    const fn plain(label: &'static str, href: &'static str) -> Self {
        Self {
            label,
            target: NavTarget::Href(href),
            style: LinkStyle::Plain,
        }
    }
}

static LOGGED_IN_LINKS: [NavLink; 4] = [
    NavLink::plain("Home", "/"),
    NavLink::plain("Generate Link", "/agent-portal.html"),
    NavLink::plain("Dashboard", "/dashboard.html"),
    NavLink {
        label: "Logout",
        target: NavTarget::Logout,
        style: LinkStyle::Plain,
    },
];

static ANONYMOUS_LINKS: [NavLink; 4] = [
    NavLink::plain("Home", "/"),
    NavLink::plain("Features", "/#features"),
    NavLink::plain("Pricing", "/#pricing"),
    NavLink {
        label: "Login",
        target: NavTarget::Href("/login.html"),
        style: LinkStyle::CallToAction,
    },
];

/// Link set for the session.
pub fn links_for(session: &NavigationSession) -> &'static [NavLink] {
    if session.is_logged_in() {
        &LOGGED_IN_LINKS
    } else {
        &ANONYMOUS_LINKS
    }
}
