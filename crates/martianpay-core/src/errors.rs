/// Error types for MartianPay core operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// JSON serialization/deserialization errors.
    #[error("Serde JSON error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),

    /// A string that is not a plain decimal number was used as an amount.
    #[error("Invalid amount '{0}': expected a decimal string such as \"12.50\"")]
    InvalidAmount(String),

    /// Decimal arithmetic errors, e.g. more significant digits than `Decimal` can hold.
    #[error("Decimal error: {0}")]
    Decimal(#[from] rust_decimal::Error),

    /// The amount has more fraction digits than the asset supports.
    #[error("Amount '{value}' has more than {decimals} decimal places")]
    AmountPrecision { value: String, decimals: u32 },

    /// An asset declared more decimal places than an `i128` count of smallest units can carry.
    #[error("Unsupported number of decimal places: {0}")]
    DecimalsOutOfRange(u32),

    /// The amount does not fit in the requested integer representation.
    #[error("Amount '{0}' overflows the smallest-unit representation")]
    AmountOverflow(String),

    /// A metadata map exceeds one of the documented soft limits.
    #[error("Metadata limit exceeded: {0}")]
    MetadataLimit(String),

    /// A JSON document carried an `object` discriminator for a different resource.
    #[error("Object mismatch: expected '{expected}', found '{found}'")]
    ObjectMismatch {
        expected: &'static str,
        found: String,
    },
}

/// A specialized `Result` type for MartianPay core operations.
pub type Result<T> = std::result::Result<T, Error>;
