//! Client Storage Port - key/value storage held by the browser.
//!
//! Navigation state (the login flag and the agency identity) lives on the
//! client. This port lets the renderer read and clear it without a real
//! browser, so cookies, in-memory maps and test doubles all fit behind it.

/// Port for string key/value client storage
pub trait ClientStorage {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);

    /// Removes `key`. Removing a missing key is a no-op.
    fn remove(&mut self, key: &str);

    /// Removes every key in `keys`.
    fn clear(&mut self, keys: &[&str]) {
        for key in keys {
            self.remove(key);
        }
    }
}
