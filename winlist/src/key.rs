use alloc::string::{String, ToString};
use alloc::sync::Arc;

use crate::VirtualItem;

/// Derives a stable render key for an item.
///
/// Receives the item and its index in the sequence. Keys should be unique within one list so
/// the rendering layer can reuse mounted rows across layout passes.
pub type KeyFn<T> = Arc<dyn Fn(&T, usize) -> String + Send + Sync>;

/// The default key: the stringified index.
pub fn index_key(index: usize) -> String {
    index.to_string()
}

/// Applies `key_fn` when present, falling back to [`index_key`].
pub fn derive_key<T>(key_fn: Option<&KeyFn<T>>, item: &T, index: usize) -> String {
    match key_fn {
        Some(f) => f(item, index),
        None => index_key(index),
    }
}

impl<T> VirtualItem<'_, T> {
    pub fn key_with(&self, key_fn: Option<&KeyFn<T>>) -> String {
        derive_key(key_fn, self.item, self.index)
    }
}
