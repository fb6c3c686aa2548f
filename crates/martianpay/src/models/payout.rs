//! Payouts of settled balance to a wallet or bank account.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use martianpay_core::{
    api_enum,
    types::{AmountValue, Metadata, Timestamp},
};

use crate::{
    concepts::{api_resource, generated_id},
    models::asset::AmlInfo,
};

api_enum! {
    pub enum PayoutStatus {
        Pending => "pending",
        /// Waiting for a second team member to approve.
        PendingApproval => "pending_approval",
        InTransit => "in_transit",
        Paid => "paid",
        Failed => "failed",
        Canceled => "canceled",
    }
}

/// A merchant-initiated payout. IDs look like `po_` followed by 24 characters.
///
/// The source and receive sides may be different assets, in which case the platform
/// swaps at `exchange_rate` before sending.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    pub id: String,
    pub object: Option<String>,
    pub source_asset_id: Option<String>,
    pub source_amount: Option<AmountValue>,
    pub receive_asset_id: Option<String>,
    pub receive_amount: Option<AmountValue>,
    pub exchange_rate: Option<AmountValue>,
    /// Fee charged in the source asset.
    pub fee: Option<AmountValue>,
    pub wallet_address: Option<String>,
    pub network: Option<String>,
    /// Bank account reference for fiat payouts.
    pub bank_account_id: Option<String>,
    /// Merchant's own reference; unique per merchant.
    pub external_id: Option<String>,
    pub status: Option<PayoutStatus>,
    pub failure_message: Option<String>,
    pub tx_id: Option<String>,
    pub aml_info: Option<AmlInfo>,
    pub description: Option<String>,
    pub metadata: Option<Metadata>,
    pub arrival_date: Option<Timestamp>,
    pub created: Option<Timestamp>,
    pub updated: Option<Timestamp>,
    pub livemode: Option<bool>,
}

api_resource!(Payout, "payout");
generated_id!(Payout, "po_", 24);
