use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use martianpay_core::types::{AmountValue, Metadata, Timestamp};

use crate::concepts::{api_resource, generated_id};

/// A customer of the merchant. IDs look like `cus_` followed by 24 characters.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub object: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub description: Option<String>,
    pub metadata: Option<Metadata>,
    /// Lifetime amount paid, in `currency`.
    pub total_spent: Option<AmountValue>,
    pub currency: Option<String>,
    pub created: Option<Timestamp>,
    pub updated: Option<Timestamp>,
    pub livemode: Option<bool>,
}

api_resource!(Customer, "customer");
generated_id!(Customer, "cus_", 24);
