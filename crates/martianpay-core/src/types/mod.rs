//! Core types used across the MartianPay data model.

mod amount;
mod common;
mod enums;
mod id;
mod metadata;

pub use amount::*;
pub use common::*;
pub use id::*;
pub use metadata::*;

pub use rust_decimal::{Decimal, RoundingStrategy};
