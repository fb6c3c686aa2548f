use bon::Builder;

use crate::{
    errors::{Error, Result},
    types::Metadata,
};

/// Soft limits the API documents for resource metadata.
///
/// The SDK checks these only when asked to; metadata received from the server is never
/// rejected for exceeding them.
///
/// ```
/// use martianpay_core::types::{Metadata, MetadataLimits};
///
/// let limits = MetadataLimits::builder().max_keys(1).build();
/// let mut metadata = Metadata::new();
/// metadata.insert("order".into(), "A-1".into());
/// assert!(limits.validate(&metadata).is_ok());
///
/// metadata.insert("store".into(), "berlin".into());
/// assert!(limits.validate(&metadata).is_err());
/// ```
#[derive(Builder, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataLimits {
    #[builder(default = 50)]
    pub max_keys: usize,
    /// Counted in characters, not bytes.
    #[builder(default = 40)]
    pub max_key_length: usize,
    /// Counted in characters, not bytes.
    #[builder(default = 500)]
    pub max_value_length: usize,
}

impl Default for MetadataLimits {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl MetadataLimits {
    pub fn validate(&self, metadata: &Metadata) -> Result<()> {
        if metadata.len() > self.max_keys {
            return Err(Error::MetadataLimit(format!(
                "{} keys exceeds the maximum of {}",
                metadata.len(),
                self.max_keys
            )));
        }

        for (key, value) in metadata {
            if key.chars().count() > self.max_key_length {
                return Err(Error::MetadataLimit(format!(
                    "key '{}' is longer than {} characters",
                    key, self.max_key_length
                )));
            }
            if value.chars().count() > self.max_value_length {
                return Err(Error::MetadataLimit(format!(
                    "value for key '{}' is longer than {} characters",
                    key, self.max_value_length
                )));
            }
        }

        Ok(())
    }
}
