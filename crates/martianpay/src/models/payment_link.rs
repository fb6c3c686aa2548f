use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use martianpay_core::types::{AmountValue, Metadata, Timestamp};

use crate::concepts::api_resource;

/// A reusable hosted checkout URL for a product or a fixed amount.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentLink {
    pub id: String,
    pub object: Option<String>,
    pub url: Option<String>,
    pub active: Option<bool>,
    pub product_id: Option<String>,
    pub variant_id: Option<String>,
    pub selling_plan_id: Option<String>,
    /// Fixed amount, for links not tied to a product.
    pub amount: Option<AmountValue>,
    pub currency: Option<String>,
    pub allow_quantity: Option<bool>,
    pub success_url: Option<String>,
    pub metadata: Option<Metadata>,
    pub created: Option<Timestamp>,
    pub updated: Option<Timestamp>,
    pub livemode: Option<bool>,
}

api_resource!(PaymentLink, "payment_link");
