//! MartianPay API resources.

pub mod asset;
pub mod balance;
pub mod charge;
pub mod customer;
pub mod event;
pub mod invoice;
pub mod member;
pub mod merchant;
pub mod order;
pub mod payment_intent;
pub mod payment_link;
pub mod payout;
pub mod payroll;
pub mod product;
pub mod refund;
pub mod selling_plan;
pub mod settlement;
pub mod subscription;
pub mod transaction;
pub mod webhook;
pub mod withdraw;
