//! Navigation module - the site navigation bar.
//!
//! The login state arrives as an explicit [`NavigationSession`]; reading it
//! from client storage happens in the application layer.

pub mod links;
pub mod renderer;
pub mod session;

pub use links::{links_for, LinkStyle, NavLink, NavTarget, LOGOUT_PATH};
pub use renderer::{inject, render, NAV_MARKER};
pub use session::{
    LogoutOutcome, NavigationSession, AGENCY_EMAIL_KEY, LOGGED_IN_KEY, LOGIN_PAGE, SESSION_KEYS,
};
