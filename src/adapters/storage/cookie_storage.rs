//! Cookie-backed Client Storage Adapter
//!
//! Reads client storage from the request's `Cookie` headers and records
//! every change so the response can replay it as `Set-Cookie` headers.

use http::header::{COOKIE, SET_COOKIE};
use http::{HeaderMap, HeaderValue};
use std::collections::HashMap;

use crate::ports::ClientStorage;

#[derive(Debug, Clone, PartialEq, Eq)]
enum CookieChange {
    Set(String),
    Removed,
}

/// Client storage carried in HTTP cookies
#[derive(Debug, Clone, Default)]
pub struct CookieStorage {
    cookies: HashMap<String, String>,
    changes: Vec<(String, CookieChange)>,
}

impl CookieStorage {
    /// Parse every `Cookie` header of a request
    ///
    /// Later duplicates of a name win. Malformed pairs are skipped.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let cookies = headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|header| header.split(';'))
            .filter_map(|pair| {
                let (name, value) = pair.trim().split_once('=')?;
                let name = name.trim();
                if name.is_empty() {
                    return None;
                }
                Some((name.to_string(), value.trim().trim_matches('"').to_string()))
            })
            .collect();

        Self {
            cookies,
            changes: Vec::new(),
        }
    }

    /// `Set-Cookie` values for every change made through the port, in order
    pub fn set_cookie_headers(&self) -> Vec<HeaderValue> {
        self.changes
            .iter()
            .filter_map(|(name, change)| {
                let cookie = match change {
                    CookieChange::Set(value) => {
                        format!("{}={}; Path=/; SameSite=Lax", name, value)
                    }
                    CookieChange::Removed => {
                        format!("{}=; Path=/; Max-Age=0; SameSite=Lax", name)
                    }
                };
                match HeaderValue::from_str(&cookie) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(cookie = %name, "Skipping cookie with invalid characters");
                        None
                    }
                }
            })
            .collect()
    }

    /// Append the recorded changes to response headers
    pub fn write_to(&self, headers: &mut HeaderMap) {
        for value in self.set_cookie_headers() {
            headers.append(SET_COOKIE, value);
        }
    }
}

impl ClientStorage for CookieStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.cookies.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.cookies.insert(key.to_string(), value.to_string());
        self.changes
            .push((key.to_string(), CookieChange::Set(value.to_string())));
    }

    fn remove(&mut self, key: &str) {
        self.cookies.remove(key);
        self.changes.push((key.to_string(), CookieChange::Removed));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn test_parses_cookie_header() {
        let storage = CookieStorage::from_headers(&headers(
            "agencyLoggedIn=true; agencyEmail=ops@acme.test; theme=dark",
        ));

        assert_eq!(storage.get("agencyLoggedIn").as_deref(), Some("true"));
        assert_eq!(storage.get("agencyEmail").as_deref(), Some("ops@acme.test"));
        assert_eq!(storage.get("missing"), None);
    }

    #[test]
    fn test_skips_malformed_pairs_and_unquotes() {
        let storage = CookieStorage::from_headers(&headers("junk; =x; flag=\"true\""));

        assert_eq!(storage.get("flag").as_deref(), Some("true"));
        assert_eq!(storage.get("junk"), None);
    }

    #[test]
    fn test_multiple_cookie_headers() {
        let mut map = headers("a=1");
        map.append(COOKIE, HeaderValue::from_static("b=2"));

        let storage = CookieStorage::from_headers(&map);

        assert_eq!(storage.get("a").as_deref(), Some("1"));
        assert_eq!(storage.get("b").as_deref(), Some("2"));
    }

    #[test]
    fn test_no_changes_no_set_cookie() {
        let storage = CookieStorage::from_headers(&headers("a=1"));
        assert!(storage.set_cookie_headers().is_empty());
    }

    #[test]
    fn test_remove_expires_cookie() {
        let mut storage = CookieStorage::from_headers(&headers("agencyLoggedIn=true"));
        storage.remove("agencyLoggedIn");

        assert_eq!(storage.get("agencyLoggedIn"), None);
        let set_cookies = storage.set_cookie_headers();
        assert_eq!(set_cookies.len(), 1);
        assert_eq!(
            set_cookies[0].to_str().unwrap(),
            "agencyLoggedIn=; Path=/; Max-Age=0; SameSite=Lax"
        );
    }

    #[test]
    fn test_set_records_cookie_and_write_to_appends() {
        let mut storage = CookieStorage::default();
        storage.set("agencyLoggedIn", "true");
        storage.remove("agencyEmail");

        let mut response_headers = HeaderMap::new();
        storage.write_to(&mut response_headers);

        let values: Vec<&str> = response_headers
            .get_all(SET_COOKIE)
            .iter()
            .map(|v| v.to_str().unwrap())
            .collect();
        assert_eq!(
            values,
            vec![
                "agencyLoggedIn=true; Path=/; SameSite=Lax",
                "agencyEmail=; Path=/; Max-Age=0; SameSite=Lax",
            ]
        );
    }

    #[test]
    fn test_invalid_value_is_skipped() {
        let mut storage = CookieStorage::default();
        storage.set("bad", "line\nbreak");
        assert!(storage.set_cookie_headers().is_empty());
    }
}
