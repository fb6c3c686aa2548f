//! On-chain transactions observed or sent by the platform.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use martianpay_core::{
    api_enum,
    types::{AmountValue, Timestamp},
};

use crate::{
    concepts::api_resource,
    models::asset::{AmlInfo, AmlStatus},
};

api_enum! {
    pub enum TransactionType {
        /// Incoming customer payment to a deposit address.
        Deposit => "deposit",
        Refund => "refund",
        Payout => "payout",
        Withdraw => "withdraw",
        Swap => "swap",
        /// Platform-internal movement between custody wallets.
        Sweep => "sweep",
    }
}

api_enum! {
    pub enum TransactionStatus {
        Pending => "pending",
        /// Seen on chain, waiting for enough confirmations.
        Confirming => "confirming",
        Confirmed => "confirmed",
        Failed => "failed",
        /// Held by AML screening.
        Frozen => "frozen",
    }
}

/// A blockchain transaction as a standalone resource.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub object: Option<String>,
    /// Transaction hash.
    pub tx_id: Option<String>,
    #[serde(rename = "type")]
    pub transaction_type: Option<TransactionType>,
    pub status: Option<TransactionStatus>,
    pub network: Option<String>,
    pub asset_id: Option<String>,
    pub amount: Option<AmountValue>,
    /// Network fee paid for the transaction, in the network's native asset.
    pub network_fee: Option<AmountValue>,
    pub source_address: Option<String>,
    pub destination_address: Option<String>,
    pub block_number: Option<u64>,
    pub confirmations: Option<u32>,
    pub required_confirmations: Option<u32>,
    pub aml_info: Option<AmlInfo>,
    pub created: Option<Timestamp>,
    pub confirmed_at: Option<Timestamp>,
}

api_resource!(Transaction, "transaction");

impl Transaction {
    /// Whether the transaction has the confirmations the platform waits for.
    pub fn is_final(&self) -> bool {
        match (self.confirmations, self.required_confirmations) {
            (Some(have), Some(need)) => have >= need,
            _ => self.status == Some(TransactionStatus::Confirmed),
        }
    }
}

/// Flattened transaction view embedded in charges, refunds and payouts.
///
/// This is its own wire contract: it names the owning resource directly and carries the
/// AML status inline rather than nesting a full [`Transaction`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDetails {
    pub tx_id: Option<String>,
    #[serde(rename = "type")]
    pub transaction_type: Option<TransactionType>,
    pub status: Option<TransactionStatus>,
    pub network: Option<String>,
    pub asset_id: Option<String>,
    pub amount: Option<AmountValue>,
    pub network_fee: Option<AmountValue>,
    pub source_address: Option<String>,
    pub destination_address: Option<String>,
    pub charge_id: Option<String>,
    pub refund_id: Option<String>,
    pub payout_id: Option<String>,
    pub aml_status: Option<AmlStatus>,
    pub aml_info: Option<AmlInfo>,
    pub created: Option<Timestamp>,
}
