//! Settlements: the merchant's side of a charge or refund after fees and conversion.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use martianpay_core::{
    api_enum,
    types::{AmountValue, Timestamp},
};

use crate::{concepts::api_resource, models::asset::AssetAmount};

api_enum! {
    pub enum SettlementStatus {
        Pending => "pending",
        Settled => "settled",
        /// Held while AML review of the source funds is open.
        Frozen => "frozen",
        Failed => "failed",
    }
}

api_enum! {
    /// What produced the settlement.
    pub enum SettlementSource {
        Charge => "charge",
        Refund => "refund",
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub id: String,
    pub object: Option<String>,
    pub merchant_account_id: Option<String>,
    pub source_type: Option<SettlementSource>,
    /// ID of the charge or refund named by `source_type`.
    pub source_id: Option<String>,
    pub payment_intent: Option<String>,
    /// Amount as collected, before fees.
    pub original_amount: Option<AssetAmount>,
    pub fee_amount: Option<AssetAmount>,
    pub tax_amount: Option<AssetAmount>,
    /// Amount credited to the merchant, in the settlement asset.
    pub settlement_amount: Option<AssetAmount>,
    pub exchange_rate: Option<AmountValue>,
    pub status: Option<SettlementStatus>,
    pub settled_at: Option<Timestamp>,
    pub created: Option<Timestamp>,
    pub livemode: Option<bool>,
}

api_resource!(Settlement, "settlement");

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::concepts::ApiResource;

    #[test]
    fn settlement_round_trip() {
        let json = json!({
            "id": "stl_0Pq",
            "object": "settlement",
            "merchant_account_id": "ma_Qm3Xr8Tz1Lp0Vn6Ks2Hd9Wy4",
            "source_type": "charge",
            "source_id": "ch_Lk2Pz9",
            "payment_intent": "pi_Jt0m8Qw2Xz",
            "original_amount": {"amount": "0.021000000000000000", "asset_id": "ETH-Ethereum"},
            "fee_amount": {"amount": "0.000168000000000000", "asset_id": "ETH-Ethereum"},
            "settlement_amount": {"amount": "74.31", "asset_id": "USD"},
            "exchange_rate": "3564.120000000000000000",
            "status": "settled",
            "settled_at": 1717344517,
            "created": 1717171717
        });

        let settlement = Settlement::from_json(&json).unwrap();
        assert_eq!(settlement.source_type, Some(SettlementSource::Charge));
        assert_eq!(
            settlement.exchange_rate.as_ref().unwrap().to_string(),
            "3564.120000000000000000"
        );
        assert_eq!(settlement.to_json().unwrap(), json);
    }
}
