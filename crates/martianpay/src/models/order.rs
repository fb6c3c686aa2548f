use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use martianpay_core::{
    api_enum,
    types::{AmountValue, Metadata, Timestamp},
};

use crate::concepts::api_resource;

api_enum! {
    pub enum OrderStatus {
        Created => "created",
        PendingPayment => "pending_payment",
        Paid => "paid",
        Fulfilled => "fulfilled",
        Canceled => "canceled",
        Refunded => "refunded",
    }
}

/// A checkout order: the items bought and the payment intent that pays for them.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub object: Option<String>,
    pub merchant_order_id: Option<String>,
    /// Customer ID.
    pub customer: Option<String>,
    pub status: Option<OrderStatus>,
    pub currency: Option<String>,
    pub subtotal: Option<AmountValue>,
    pub tax: Option<AmountValue>,
    pub shipping: Option<AmountValue>,
    pub total_amount: Option<AmountValue>,
    pub items: Option<Vec<OrderItem>>,
    /// Payment intent ID.
    pub payment_intent: Option<String>,
    pub invoice_id: Option<String>,
    pub subscription_id: Option<String>,
    pub payment_link_id: Option<String>,
    pub metadata: Option<Metadata>,
    pub paid_at: Option<Timestamp>,
    pub created: Option<Timestamp>,
    pub updated: Option<Timestamp>,
    pub livemode: Option<bool>,
}

api_resource!(Order, "order");

impl Order {
    /// Total units across all lines. Lines without a quantity count as one.
    pub fn item_count(&self) -> u64 {
        self.items
            .iter()
            .flatten()
            .map(|item| u64::from(item.quantity.unwrap_or(1)))
            .sum()
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: Option<String>,
    pub variant_id: Option<String>,
    pub selling_plan_id: Option<String>,
    pub name: Option<String>,
    pub quantity: Option<u32>,
    pub unit_price: Option<AmountValue>,
    pub amount: Option<AmountValue>,
}
