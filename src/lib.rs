//! # assoc-array
//!
//! `assoc-array` is a Rust crate for working with **associative arrays**
//! backed by a plain growable array of key-value pairs.
//!
//! Lookups walk the pairs front to back, so every operation is `O(n)`. In
//! exchange the container stays simple and predictable: keys only need `Eq`
//! (no `Hash`, no `Ord`), pairs keep their insertion order, and removing a
//! pair closes the gap by shifting later pairs left, preserving the relative
//! order of the survivors.
//!
//! Like `HashMap`, the container never holds two values for the same key:
//! setting an existing key replaces its pair in place, at the same position.
//!
//! ## Null keys and values
//!
//! Both sides of a pair are nullable. The null key (`None`) is an ordinary
//! key that matches only itself and never collides with a real key; a null
//! value is stored and returned verbatim, so a present key with a null value
//! is distinguishable from an absent key.
//!
//! ## Rendering
//!
//! The `Display` implementation renders the pairs in insertion order as
//! `{ k1: v1, k2: v2 }`, with null sides as the literal text `null` and the
//! empty array as `{ }`.
//!
//! ## Serde
//!
//! With the `serde` feature enabled, an array (de)serializes as a sequence of
//! `(key, value)` tuples, which keeps insertion order and admits the null
//! key, something a serde map cannot represent.
//!
//! ### Example
//! ```rust
//! use assoc_array::AssocArray;
//!
//! let mut courses = AssocArray::new();
//! courses.set("CSC", 207);
//! courses.set("BIO", 150);
//! courses.set("STA", 209);
//!
//! assert_eq!(courses.get("CSC"), Ok(Some(&207)));
//! assert_eq!(courses.to_string(), "{ CSC: 207, BIO: 150, STA: 209 }");
//!
//! courses.remove("BIO");
//! assert_eq!(courses.to_string(), "{ CSC: 207, STA: 209 }");
//! ```

mod error;
mod lookup;
mod macros;
mod pair;

#[cfg(feature = "serde")]
mod serde_impls;

pub use error::KeyNotFoundError;
pub use pair::KvPair;

use lookup::Lookup;

use core::fmt;

/// The number of pair slots a new `AssocArray` allocates up front, and the
/// fixed increment added by every expansion of a full array.
pub const DEFAULT_CAPACITY: usize = 16;

/// An associative array backed by a `Vec` of key-value pairs.
///
/// `AssocArray` scans its pairs linearly and requires keys to implement only
/// the `Eq` trait, providing a simple alternative to `HashMap` or `BTreeMap`
/// for types without `Hash` or `Ord`. Pairs keep their insertion order, which
/// changes only when an element before them is removed.
///
/// Keys are unique under the key-equality rule: two keys match iff both are
/// the null key, or both are present and equal by value. Setting an existing
/// key replaces its pair in place.
///
/// ### Example
/// ```rust
/// use assoc_array::AssocArray;
///
/// let mut array = AssocArray::new();
/// array.set("CSC", 207);
/// array.set("BIO", 150);
///
/// assert_eq!(array.get("CSC"), Ok(Some(&207)));
/// assert_eq!(array.to_string(), "{ CSC: 207, BIO: 150 }");
/// ```
pub struct AssocArray<K, V> {
    pairs: Vec<KvPair<K, V>>,
}

impl<K, V> Default for AssocArray<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> AssocArray<K, V> {
    /// Creates an empty `AssocArray` with the default backing capacity.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_array::{AssocArray, DEFAULT_CAPACITY};
    ///
    /// let array: AssocArray<&str, i32> = AssocArray::new();
    /// assert!(array.is_empty());
    /// assert!(array.capacity() >= DEFAULT_CAPACITY);
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty `AssocArray` with at least the specified capacity.
    ///
    /// ### Parameters
    /// - `capacity`: The number of pairs to allocate space for initially.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_array::AssocArray;
    ///
    /// let array: AssocArray<&str, &str> = AssocArray::with_capacity(10);
    /// assert!(array.is_empty());
    /// assert!(array.capacity() >= 10, "Expected the capacity to be at least 10");
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pairs: Vec::with_capacity(capacity),
        }
    }

    /// Binds `key` to `value`, inserting or updating as needed.
    ///
    /// If a pair with the key already exists, it is replaced in place by a
    /// new pair at the same position and the length does not change.
    /// Otherwise the new pair is appended, growing the backing storage first
    /// when it is full. Time complexity is O(n).
    ///
    /// Either argument may be `None`: the null key is a regular key for
    /// equality purposes and does not collide with any present key.
    ///
    /// ### Parameters
    /// - `key`: The key to insert or update, or `None` for the null key.
    /// - `value`: The value to associate with the key, or `None`.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_array::AssocArray;
    ///
    /// let mut array = AssocArray::new();
    /// array.set("CSC", "207");
    /// array.set("STA", "209");
    ///
    /// // Updating an existing key keeps its slot and the length
    /// array.set("CSC", "161");
    /// assert_eq!(array.get("CSC"), Ok(Some(&"161")));
    /// assert_eq!(array.len(), 2);
    ///
    /// // The null key gets a slot of its own
    /// array.set(None, "fallback");
    /// assert_eq!(array.len(), 3);
    /// ```
    pub fn set(&mut self, key: impl Into<Option<K>>, value: impl Into<Option<V>>)
    where
        K: Eq,
    {
        let pair = KvPair::new(key, value);

        match self.position(pair.key()) {
            Some(index) => self.pairs[index] = pair,
            None => {
                if self.is_full() {
                    self.expand();
                }

                self.pairs.push(pair);
            }
        }
    }

    /// Retrieves the value bound to the given key.
    ///
    /// ### Parameters
    /// - `key`: A borrowed key (`&Q`), or an optional key (`Some(&k)` /
    ///   `None`) to address the null key.
    ///
    /// ### Returns
    /// - `Ok(Some(&v))` if the key is present with a value.
    /// - `Ok(None)` if the key is present and its value is null.
    /// - `Err(KeyNotFoundError)` if no pair with the key exists.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_array::{AssocArray, KeyNotFoundError};
    ///
    /// let mut array = AssocArray::new();
    /// array.set("CSC", 207);
    /// array.set("BIO", None);
    ///
    /// assert_eq!(array.get("CSC"), Ok(Some(&207)));
    /// assert_eq!(array.get("BIO"), Ok(None));
    /// assert_eq!(array.get("PHY"), Err(KeyNotFoundError));
    /// ```
    pub fn get(&self, key: impl Lookup<K>) -> Result<Option<&V>, KeyNotFoundError> {
        self.position(key)
            .map(|index| self.pairs[index].value())
            .ok_or(KeyNotFoundError)
    }

    /// Checks whether a pair with the given key exists. Never fails.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_array::AssocArray;
    ///
    /// let mut array = AssocArray::new();
    /// array.set("CSC", 207);
    ///
    /// assert!(array.contains_key("CSC"));
    /// assert!(!array.contains_key("BIO"));
    /// ```
    pub fn contains_key(&self, key: impl Lookup<K>) -> bool {
        self.position(key).is_some()
    }

    /// Removes the pair with the given key, if any.
    ///
    /// Every pair after the removed one shifts one position left, so the
    /// relative order of the remaining pairs is preserved. Removing a key
    /// that is not present is a no-op, not an error.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_array::AssocArray;
    ///
    /// let mut array = AssocArray::new();
    /// array.set("CSC", 207);
    /// array.set("BIO", 150);
    ///
    /// array.remove("CSC");
    /// assert!(!array.contains_key("CSC"));
    /// assert_eq!(array.len(), 1);
    ///
    /// // Removing a missing key changes nothing
    /// array.remove("CSC");
    /// assert_eq!(array.len(), 1);
    /// ```
    pub fn remove(&mut self, key: impl Lookup<K>) {
        if let Some(index) = self.position(key) {
            self.pairs.remove(index);
        }
    }

    /// Returns the index of the pair with the given key.
    ///
    /// Scans the pairs front to back and reports the position of the first
    /// match. Keys are unique, so at most one pair can match. This is the
    /// lookup that `get`, `contains_key`, `set` and `remove` build on.
    ///
    /// ### Returns
    /// - `Ok(index)` of the matching pair.
    /// - `Err(KeyNotFoundError)` if no pair with the key exists.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_array::{AssocArray, KeyNotFoundError};
    ///
    /// let mut array = AssocArray::new();
    /// array.set("CSC", 207);
    /// array.set("BIO", 150);
    ///
    /// assert_eq!(array.find("BIO"), Ok(1));
    /// assert_eq!(array.find("PHY"), Err(KeyNotFoundError));
    ///
    /// // Indices reflect the left shift after a removal
    /// array.remove("CSC");
    /// assert_eq!(array.find("BIO"), Ok(0));
    /// ```
    pub fn find(&self, key: impl Lookup<K>) -> Result<usize, KeyNotFoundError> {
        self.position(key).ok_or(KeyNotFoundError)
    }

    fn position(&self, key: impl Lookup<K>) -> Option<usize> {
        self.pairs.iter().position(|pair| key.matches(pair.key()))
    }

    fn is_full(&self) -> bool {
        self.pairs.len() == self.pairs.capacity()
    }

    fn expand(&mut self) {
        // Grows by a fixed DEFAULT_CAPACITY increment, never by doubling.
        self.pairs.reserve_exact(DEFAULT_CAPACITY);
    }
}

impl<K, V> AssocArray<K, V> {
    /// Returns the number of pairs the array can hold without growing.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_array::{AssocArray, DEFAULT_CAPACITY};
    ///
    /// let array: AssocArray<&str, i32> = AssocArray::new();
    /// assert!(array.capacity() >= DEFAULT_CAPACITY);
    /// ```
    pub fn capacity(&self) -> usize {
        self.pairs.capacity()
    }

    /// Returns the number of pairs in the array, not its capacity.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_array::AssocArray;
    ///
    /// let mut array = AssocArray::new();
    /// array.set("CSC", 207);
    /// array.set("BIO", 150);
    /// assert_eq!(array.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if the array contains no pairs, otherwise `false`.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_array::AssocArray;
    ///
    /// let mut array = AssocArray::new();
    /// assert!(array.is_empty());
    ///
    /// array.set("CSC", 207);
    /// assert!(!array.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Removes all pairs. The capacity is not affected.
    ///
    /// ### Example
    /// ```rust
    /// use assoc_array::AssocArray;
    ///
    /// let mut array = AssocArray::new();
    /// array.set("CSC", 207);
    ///
    /// array.clear();
    /// assert!(array.is_empty());
    /// assert_eq!(array.to_string(), "{ }");
    /// ```
    pub fn clear(&mut self) {
        self.pairs.clear();
    }
}

impl<K: Clone + Eq, V: Clone> Clone for AssocArray<K, V> {
    fn clone(&self) -> Self {
        let mut clone = Self::new();

        for pair in &self.pairs {
            clone.set(pair.key().cloned(), pair.value().cloned());
        }

        clone
    }

    fn clone_from(&mut self, source: &Self) {
        self.pairs.clear();

        for pair in &source.pairs {
            self.set(pair.key().cloned(), pair.value().cloned());
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for AssocArray<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        self.pairs.iter().for_each(|pair| {
            map.entry(&pair.key(), &pair.value());
        });
        map.finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for AssocArray<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{ ")?;

        let mut pairs = self.pairs.iter();

        if let Some(first) = pairs.next() {
            write!(f, "{}", first)?;

            for pair in pairs {
                write!(f, ", {}", pair)?;
            }

            f.write_str(" ")?;
        }

        f.write_str("}")
    }
}

impl<K: Eq, V: PartialEq> PartialEq for AssocArray<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.pairs.iter().all(|pair| {
                other
                    .position(pair.key())
                    .map(|index| other.pairs[index].value() == pair.value())
                    .unwrap_or(false)
            })
    }
}

impl<K: Eq, V: Eq> Eq for AssocArray<K, V> {}
