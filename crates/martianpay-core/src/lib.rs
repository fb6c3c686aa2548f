//! MartianPay core library.
//!
//! This library provides the primitives shared by every MartianPay resource model:
//! exact decimal amounts, Unix timestamps, client-side identifiers, metadata limits
//! and the string-backed enums used for status fields.

pub mod errors;
pub mod types;

#[doc(hidden)]
pub use serde as __serde;
