use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use martianpay_core::{api_enum, types::Timestamp};

use crate::{
    concepts::api_resource,
    models::asset::{AmlInfo, AssetAmount},
};

api_enum! {
    pub enum WithdrawStatus {
        Pending => "pending",
        Processing => "processing",
        Succeeded => "succeeded",
        Failed => "failed",
        Canceled => "canceled",
    }
}

/// A withdrawal of available balance to one of the merchant's verified addresses.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Withdraw {
    pub id: String,
    pub object: Option<String>,
    pub amount: Option<AssetAmount>,
    pub fee: Option<AssetAmount>,
    /// Merchant address ID the funds are sent to.
    pub merchant_address_id: Option<String>,
    pub address: Option<String>,
    pub network: Option<String>,
    pub status: Option<WithdrawStatus>,
    pub failure_reason: Option<String>,
    pub tx_id: Option<String>,
    pub aml_info: Option<AmlInfo>,
    pub created: Option<Timestamp>,
    pub updated: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
}

api_resource!(Withdraw, "withdraw");
