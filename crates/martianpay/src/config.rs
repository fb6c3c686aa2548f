use bon::Builder;

use martianpay_core::{
    errors::Result,
    types::{Metadata, MetadataLimits},
};

/// The API version these models were written against.
pub const DEFAULT_API_VERSION: &str = "2024-10-01";

/// SDK-wide settings.
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
pub struct SdkConfig {
    /// API version sent with requests and expected in webhook events.
    #[builder(into, default = DEFAULT_API_VERSION.to_string())]
    pub api_version: String,
    /// Soft limits for metadata maps.
    #[builder(default)]
    pub metadata_limits: MetadataLimits,
    /// When `false`, [`SdkConfig::check_metadata`] accepts everything.
    #[builder(default = false)]
    pub enforce_metadata_limits: bool,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl SdkConfig {
    /// Checks outgoing metadata against the configured limits when enforcement is on.
    pub fn check_metadata(&self, metadata: &Metadata) -> Result<()> {
        if !self.enforce_metadata_limits {
            return Ok(());
        }
        let result = self.metadata_limits.validate(metadata);
        #[cfg(feature = "tracing")]
        if let Err(err) = &result {
            tracing::debug!("Rejected outgoing metadata: {}", err);
        }
        result
    }

    /// Whether an event was rendered with the API version this SDK is configured for.
    pub fn matches_api_version(&self, version: Option<&str>) -> bool {
        version.is_none_or(|v| v == self.api_version)
    }
}
