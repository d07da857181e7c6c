use std::collections::hash_map::Entry;
use std::fmt;

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::hash::{CodePointSum, KeyHasher};

/// All the keys sharing one hash code, keyed by the original string
pub type Bucket<V> = FxHashMap<String, V>;

/// A separate chaining hash table with string keys.
/// Every key is hashed with `H` (the code point sum by default) and
/// stored in the bucket for that code, colliding keys simply share the
/// bucket. Buckets are created on the first insert for their code and are
/// never dropped, removing the last key leaves an empty bucket behind.
/// There is no resizing, the number of buckets is whatever the hasher
/// produces.
#[derive(Clone)]
pub struct HashTable<V, H = CodePointSum> {
    collection: FxHashMap<u64, Bucket<V>>,
    hasher: H,
}

impl<V> HashTable<V, CodePointSum> {
    /// Creates an empty table using the code point sum hash
    pub fn new() -> Self {
        Self::with_hasher(CodePointSum)
    }
}

impl<V, H: KeyHasher + Default> Default for HashTable<V, H> {
    fn default() -> Self {
        Self::with_hasher(H::default())
    }
}

impl<V, H: KeyHasher> HashTable<V, H> {
    /// Creates an empty table that selects buckets with `hasher`
    pub fn with_hasher(hasher: H) -> Self {
        Self {
            collection: FxHashMap::default(),
            hasher,
        }
    }

    /// The hash code `key` is bucketed under
    pub fn hash_code(&self, key: &str) -> u64 {
        self.hasher.hash_key(key)
    }

    fn bucket_mut(&mut self, code: u64) -> &mut Bucket<V> {
        self.collection.entry(code).or_insert_with(|| {
            trace!(code, "created bucket");
            Bucket::default()
        })
    }

    /// Stores `value` under `key`, overwriting any previous value in place.
    pub fn add(&mut self, key: &str, value: V) {
        let code = self.hash_code(key);
        let bucket = self.bucket_mut(code);
        match bucket.get_mut(key) {
            Some(slot) => *slot = value,
            None => {
                bucket.insert(key.to_owned(), value);
            }
        }
    }

    /// Removes `key` if present, otherwise does nothing.
    /// The bucket stays in place even when this empties it.
    pub fn remove(&mut self, key: &str) {
        self.take(key);
    }

    /// Same as [`HashTable::remove`] but returns the removed value
    pub fn take(&mut self, key: &str) -> Option<V> {
        let code = self.hash_code(key);
        let bucket = self.collection.get_mut(&code)?;
        let value = bucket.remove(key)?;
        if bucket.is_empty() {
            trace!(code, "bucket left empty");
        }
        Some(value)
    }

    /// Returns the value stored under `key`.
    ///
    /// `None` means the key is absent. Since values are never optional
    /// themselves, a stored "null" (e.g. [`crate::Value::Null`]) comes
    /// back as `Some` and can't be confused with a missing key.
    pub fn lookup(&self, key: &str) -> Option<&V> {
        let code = self.hash_code(key);
        self.collection.get(&code)?.get(key)
    }

    pub fn lookup_mut(&mut self, key: &str) -> Option<&mut V> {
        let code = self.hash_code(key);
        self.collection.get_mut(&code)?.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Gets the entry for `key` inside its bucket.
    /// Like [`HashTable::add`] this creates the bucket if it is missing,
    /// even if the entry is never filled.
    pub fn entry(&mut self, key: &str) -> Entry<'_, String, V> {
        let code = self.hash_code(key);
        self.bucket_mut(code).entry(key.to_owned())
    }

    /// Returns the number of key-value pairs in the table
    pub fn len(&self) -> usize {
        self.collection.values().map(|bucket| bucket.len()).sum()
    }

    /// Returns true if the table holds no key-value pairs,
    /// empty buckets don't count
    pub fn is_empty(&self) -> bool {
        self.collection.values().all(|bucket| bucket.is_empty())
    }

    /// Returns the number of buckets, including empty ones
    pub fn bucket_count(&self) -> usize {
        self.collection.len()
    }

    pub fn bucket(&self, code: u64) -> Option<&Bucket<V>> {
        self.collection.get(&code)
    }

    /// Iterates over all key-value pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.collection
            .values()
            .flat_map(|bucket| bucket.iter().map(|(k, v)| (k.as_str(), v)))
    }
}

impl<V, H: KeyHasher> Extend<(String, V)> for HashTable<V, H> {
    fn extend<I: IntoIterator<Item = (String, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            let code = self.hash_code(&key);
            self.bucket_mut(code).insert(key, value);
        }
    }
}

impl<V, H: KeyHasher + Default> FromIterator<(String, V)> for HashTable<V, H> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut table = Self::default();
        table.extend(iter);
        table
    }
}

impl<V: fmt::Debug, H> fmt::Debug for HashTable<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTable")
            .field("collection", &self.collection)
            .finish()
    }
}
