//! Synchronous string key-value storage, the only state kept across reloads.

/// A string-keyed store such as the browser's `localStorage`.
///
/// Reads and writes are synchronous. Implementations swallow storage errors:
/// a failed read is `None`, a failed write is dropped.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}
