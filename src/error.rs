use core::fmt;

/// The error produced when a lookup targets a key with no current binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyNotFoundError;

impl fmt::Display for KeyNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("key not found")
    }
}

impl std::error::Error for KeyNotFoundError {}
