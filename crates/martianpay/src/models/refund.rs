use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use martianpay_core::{
    api_enum,
    types::{Metadata, Timestamp},
};

use crate::{
    concepts::api_resource,
    models::{asset::AssetAmount, transaction::TransactionDetails},
};

api_enum! {
    pub enum RefundStatus {
        Pending => "pending",
        Processing => "processing",
        Succeeded => "succeeded",
        Failed => "failed",
        Canceled => "canceled",
    }
}

api_enum! {
    pub enum RefundReason {
        Duplicate => "duplicate",
        Fraudulent => "fraudulent",
        RequestedByCustomer => "requested_by_customer",
        /// Customer overpaid; the surplus is returned.
        Overpayment => "overpayment",
        ExpiredUncapturedCharge => "expired_uncaptured_charge",
    }
}

/// Money returned to a customer for a charge.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Refund {
    pub id: String,
    pub object: Option<String>,
    pub amount: Option<AssetAmount>,
    /// Payment intent ID.
    pub payment_intent: Option<String>,
    /// Charge ID.
    pub charge: Option<String>,
    pub reason: Option<RefundReason>,
    pub status: Option<RefundStatus>,
    pub failure_reason: Option<String>,
    /// Address the refund is sent to.
    pub address: Option<String>,
    pub network: Option<String>,
    pub transactions: Option<Vec<TransactionDetails>>,
    pub description: Option<String>,
    pub metadata: Option<Metadata>,
    pub created: Option<Timestamp>,
    pub updated: Option<Timestamp>,
    pub livemode: Option<bool>,
}

api_resource!(Refund, "refund");
