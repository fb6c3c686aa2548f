//! Products and variants that payment links, orders and selling plans refer to.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use martianpay_core::types::{AmountValue, Metadata, Record, Timestamp};

use crate::concepts::api_resource;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub object: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
    /// Price of the product when it has no variants.
    pub price: Option<AmountValue>,
    pub currency: Option<String>,
    pub images: Option<Vec<String>>,
    /// Option names, e.g. `["Size", "Roast"]`.
    pub options: Option<Vec<String>>,
    pub variants: Option<Vec<ProductVariant>>,
    pub selling_plan_group_ids: Option<Vec<String>>,
    /// Whether the product can only be bought on a selling plan.
    pub requires_selling_plan: Option<bool>,
    pub metadata: Option<Metadata>,
    pub created: Option<Timestamp>,
    pub updated: Option<Timestamp>,
    pub livemode: Option<bool>,
}

api_resource!(Product, "product");

impl Product {
    pub fn variant(&self, variant_id: &str) -> Option<&ProductVariant> {
        self.variants
            .as_deref()?
            .iter()
            .find(|v| v.id.as_deref() == Some(variant_id))
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductVariant {
    pub id: Option<String>,
    pub product_id: Option<String>,
    pub title: Option<String>,
    pub sku: Option<String>,
    pub price: Option<AmountValue>,
    pub currency: Option<String>,
    /// Option name to chosen value, e.g. `{"Size": "1kg"}`.
    pub option_values: Option<Record<String>>,
    pub inventory_quantity: Option<i64>,
    pub active: Option<bool>,
}
