//! Redaction marker for personal data
//!
//! Owner names (and any other personal detail that ends up on a snapshot)
//! are wrapped in [`Sensitive`] so that `{:?}`, `{}` and structured log
//! fields never render them.

use std::fmt;

/// Placeholder rendered instead of the wrapped value
pub const REDACTED: &str = "***REDACTED***";

/// Value that formats as [`REDACTED`]
///
/// # Example
///
/// ```
/// use petshop_core_types::Sensitive;
///
/// let name = Sensitive::new("Jane Doe");
/// assert_eq!(format!("{:?}", name), "***REDACTED***");
/// assert_eq!(name.to_string(), "***REDACTED***");
/// assert_eq!(*name.expose(), "Jane Doe");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Borrow the clear value; only for rendering it back to its owner
    pub fn expose(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for Sensitive<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}
