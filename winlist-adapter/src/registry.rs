use alloc::string::String;

#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
type EntryMap<V> = HashMap<String, V>;
#[cfg(not(feature = "std"))]
type EntryMap<V> = BTreeMap<String, V>;

/// An explicit string-keyed registry of renderable capabilities.
///
/// Typical values are row renderers or icon painters stored as `Arc<dyn Trait>`. There is no
/// process-wide instance: hosts own a registry, and tests build a fresh one or call
/// [`Registry::clear`].
pub struct Registry<V> {
    entries: EntryMap<V>,
}

impl<V> Default for Registry<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Registry<V> {
    pub fn new() -> Self {
        Self {
            entries: EntryMap::new(),
        }
    }

    /// Registers `value` under `key`, returning the entry it replaced.
    pub fn register(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        let prev = self.entries.insert(key, value);
        if prev.is_some() {
            wa_debug!("Registry::register replaced an existing entry");
        }
        prev
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn unregister(&mut self, key: &str) -> Option<V> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates registered keys. Order is unspecified with `std`, sorted without it.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<V> core::fmt::Debug for Registry<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Registry")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}
