use core::fmt;

/// A single key-value binding held by an `AssocArray`.
///
/// Both sides are nullable: a pair may bind the null key, a null value, or
/// both. Pairs are read-only once constructed; updating a key's value in the
/// array replaces the whole pair rather than mutating it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KvPair<K, V> {
    key: Option<K>,
    value: Option<V>,
}

impl<K, V> KvPair<K, V> {
    /// Creates a pair binding `key` to `value`, either of which may be `None`.
    pub fn new(key: impl Into<Option<K>>, value: impl Into<Option<V>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Returns the key of this pair, or `None` for the null key.
    pub fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    /// Returns the value of this pair, or `None` for a null value.
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for KvPair<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.key {
            Some(key) => write!(f, "{}", key)?,
            None => f.write_str("null")?,
        }

        f.write_str(": ")?;

        match &self.value {
            Some(value) => write!(f, "{}", value),
            None => f.write_str("null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::KvPair;

    #[test]
    fn accessors_expose_both_sides() {
        let sut = KvPair::new("CSC", 207);

        assert_eq!(sut.key(), Some(&"CSC"));
        assert_eq!(sut.value(), Some(&207));
    }

    #[test]
    fn accessors_report_null_sides() {
        let sut: KvPair<&str, i32> = KvPair::new(None, None);

        assert_eq!(sut.key(), None);
        assert_eq!(sut.value(), None);
    }

    #[test]
    fn display_renders_key_and_value() {
        let sut = KvPair::new("CSC", 207);

        assert_eq!(sut.to_string(), "CSC: 207");
    }

    #[test]
    fn display_renders_null_sides_as_literal_text() {
        let sut: KvPair<&str, i32> = KvPair::new(None, 207);
        assert_eq!(sut.to_string(), "null: 207");

        let sut: KvPair<&str, i32> = KvPair::new("BIO", None);
        assert_eq!(sut.to_string(), "BIO: null");

        let sut: KvPair<&str, i32> = KvPair::new(None, None);
        assert_eq!(sut.to_string(), "null: null");
    }
}
