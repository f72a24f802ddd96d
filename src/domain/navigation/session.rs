//! Explicit navigation session, built from client storage by the caller.

/// Storage key of the login flag. Logged in iff the value is exactly `true`.
pub const LOGGED_IN_KEY: &str = "agencyLoggedIn";

/// Storage key of the logged-in agency's email.
pub const AGENCY_EMAIL_KEY: &str = "agencyEmail";

/// Every key cleared on logout.
pub const SESSION_KEYS: [&str; 2] = [LOGGED_IN_KEY, AGENCY_EMAIL_KEY];

/// Where logout sends the browser.
pub const LOGIN_PAGE: &str = "/login.html";

/// Login state as seen by the navigation. Trusted at face value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationSession {
    logged_in: bool,
    agency_email: Option<String>,
}

impl NavigationSession {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn logged_in(agency_email: Option<String>) -> Self {
        Self {
            logged_in: true,
            agency_email,
        }
    }

    /// Interprets raw stored values. Any flag other than `true` is anonymous.
    pub fn from_stored(flag: Option<&str>, agency_email: Option<String>) -> Self {
        if flag == Some("true") {
            Self::logged_in(agency_email)
        } else {
            Self::anonymous()
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn agency_email(&self) -> Option<&str> {
        self.agency_email.as_deref()
    }
}

/// Result of a logout: the browser should be sent to `redirect_to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoutOutcome {
    pub redirect_to: &'static str,
}

impl Default for LogoutOutcome {
    fn default() -> Self {
        Self {
            redirect_to: LOGIN_PAGE,
        }
    }
}
