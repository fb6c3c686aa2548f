//! Client-side identifiers.
//!
//! Some resources may be created with an ID chosen by the client. Those IDs are a
//! resource prefix followed by random characters from `[A-Za-z0-9]`, drawn from the
//! operating system's CSPRNG. Uniqueness is statistical; the server rejects duplicates.

use rand::{
    TryRngCore,
    distr::{Alphanumeric, SampleString},
    rngs::OsRng,
};

/// Generates `prefix` followed by `random_len` random alphanumeric characters.
///
/// ```
/// use martianpay_core::types::generate_id;
///
/// let id = generate_id("cus_", 24);
/// assert!(id.starts_with("cus_"));
/// assert_eq!(id.len(), 28);
/// ```
///
/// # Panics
///
/// Panics if the operating system random source is unavailable.
pub fn generate_id(prefix: &str, random_len: usize) -> String {
    let mut id = String::with_capacity(prefix.len() + random_len);
    id.push_str(prefix);
    Alphanumeric.append_string(&mut OsRng.unwrap_err(), &mut id, random_len);
    id
}

/// The ID format of one resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IdKind {
    pub prefix: &'static str,
    pub random_len: usize,
}

impl IdKind {
    pub const fn new(prefix: &'static str, random_len: usize) -> Self {
        IdKind { prefix, random_len }
    }

    /// Length of a complete ID, prefix included.
    pub const fn total_len(&self) -> usize {
        self.prefix.len() + self.random_len
    }

    pub fn generate(&self) -> String {
        generate_id(self.prefix, self.random_len)
    }

    /// Whether `id` has this kind's prefix, exact length and charset.
    pub fn matches(&self, id: &str) -> bool {
        id.len() == self.total_len()
            && id
                .strip_prefix(self.prefix)
                .is_some_and(|rest| rest.bytes().all(|b| b.is_ascii_alphanumeric()))
    }
}
