//! Charges: individual payment attempts against a payment intent.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use martianpay_core::{
    api_enum,
    types::{AmountValue, Metadata, Timestamp},
};

use crate::{
    concepts::api_resource,
    models::{
        asset::{AmlInfo, AssetAmount},
        payment_intent::PaymentDetails,
        refund::Refund,
        transaction::TransactionDetails,
    },
};

api_enum! {
    pub enum ChargeStatus {
        Pending => "pending",
        /// At least one deposit seen on chain, not yet confirmed.
        Processing => "processing",
        PartiallyPaid => "partially_paid",
        Succeeded => "succeeded",
        Failed => "failed",
        Expired => "expired",
        Frozen => "frozen",
    }
}

/// One attempt to collect a payment intent in a specific asset.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charge {
    pub id: String,
    pub object: Option<String>,
    /// Amount due in the paying asset.
    pub amount: Option<AssetAmount>,
    pub exchange_rate: Option<AmountValue>,
    pub payment_details: Option<PaymentDetails>,
    /// Payment intent ID.
    pub payment_intent: Option<String>,
    /// e.g. `"crypto"` or `"card"`.
    pub payment_method_type: Option<String>,
    pub deposit_account: Option<DepositAccount>,
    pub transactions: Option<Vec<TransactionDetails>>,
    pub refunds: Option<Vec<Refund>>,
    pub status: Option<ChargeStatus>,
    pub paid: Option<bool>,
    pub captured: Option<bool>,
    pub refunded: Option<bool>,
    pub failure_code: Option<String>,
    pub failure_message: Option<String>,
    pub aml_info: Option<AmlInfo>,
    pub description: Option<String>,
    pub receipt_email: Option<String>,
    pub metadata: Option<Metadata>,
    pub created: Option<Timestamp>,
    pub updated: Option<Timestamp>,
    pub livemode: Option<bool>,
}

api_resource!(Charge, "charge");

impl Charge {
    /// Transaction hashes of every on-chain transfer attached to this charge.
    pub fn tx_ids(&self) -> impl Iterator<Item = &str> {
        self.transactions
            .iter()
            .flatten()
            .filter_map(|t| t.tx_id.as_deref())
    }
}

/// The blockchain address a customer pays into.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositAccount {
    pub address: Option<String>,
    pub network: Option<String>,
    pub asset_id: Option<String>,
    /// Payment URI for wallets, e.g. `ethereum:0x...@1/transfer?...`.
    pub payment_uri: Option<String>,
    pub expired_at: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{
        concepts::ApiResource,
        models::{asset::AmlStatus, transaction::TransactionType},
    };

    #[test]
    fn charge_round_trip() {
        let json = json!({
            "id": "ch_Lk2Pz9",
            "object": "charge",
            "amount": {"amount": "49.900000", "asset_id": "USDC-Ethereum"},
            "exchange_rate": "1.000000",
            "payment_details": {
                "amount_captured": {"amount": "49.900000", "asset_id": "USDC-Ethereum"},
                "net_amount": {"amount": "49.500800", "asset_id": "USDC-Ethereum"}
            },
            "payment_intent": "pi_Jt0m8Qw2Xz",
            "payment_method_type": "crypto",
            "deposit_account": {
                "address": "0x3333333333333333333333333333333333333333",
                "network": "Ethereum",
                "asset_id": "USDC-Ethereum",
                "expired_at": 1717175317
            },
            "transactions": [
                {
                    "tx_id": "0xaaa",
                    "type": "deposit",
                    "status": "confirmed",
                    "amount": "49.900000",
                    "charge_id": "ch_Lk2Pz9"
                },
                {"type": "deposit", "status": "pending"}
            ],
            "refunds": [{"id": "re_1", "object": "refund", "status": "pending"}],
            "status": "succeeded",
            "paid": true,
            "captured": true,
            "refunded": false,
            "aml_info": {"risk_score": 3, "risk_level": "low", "status": "approved"},
            "created": 1717171717,
            "livemode": true
        });

        let charge = Charge::from_json(&json).unwrap();
        assert_eq!(charge.tx_ids().collect::<Vec<_>>(), ["0xaaa"]);
        assert_eq!(
            charge.transactions.as_ref().unwrap()[0].transaction_type,
            Some(TransactionType::Deposit)
        );
        assert_eq!(
            charge.aml_info.as_ref().unwrap().status,
            Some(AmlStatus::Approved)
        );
        assert_eq!(charge.to_json().unwrap(), json);
    }

    #[test]
    fn charge_without_transactions() {
        let charge = Charge::default();
        assert_eq!(charge.tx_ids().count(), 0);
    }
}
