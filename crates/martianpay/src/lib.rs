//! Typed data model for the MartianPay crypto and fiat payment API.
//!
//! Every resource is a plain record mirroring the JSON the API sends and accepts. Field
//! names match the snake_case wire keys, optional fields decode to `None` when absent,
//! money is an exact [`AmountValue`](martianpay_core::types::AmountValue) and timestamps
//! are Unix seconds. Webhook payloads are decoded in two passes through
//! [`Event::decode_object`](models::event::Event::decode_object).

pub mod concepts;
pub mod config;
pub mod list;
pub mod models;

pub use martianpay_core::{errors, types};
