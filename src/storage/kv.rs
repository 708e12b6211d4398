//! Durable key-value storage.

use crate::error::QuestError;

/// A store mapping string keys to opaque byte values.
///
/// `set` must replace the previous value as a whole: a later `get` sees either
/// the old value or the new one, never a mix.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, QuestError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), QuestError>;
}
