//! Merchant balances per asset.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use martianpay_core::types::{AmountValue, Timestamp};

/// A merchant's balance, split by availability.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// Always `"balance"`.
    pub object: Option<String>,
    /// Funds that can be paid out or withdrawn now.
    pub available: Option<Vec<BalanceDetail>>,
    /// Settled funds still inside their settlement window.
    pub pending: Option<Vec<BalanceDetail>>,
    /// Funds held by AML review.
    pub frozen: Option<Vec<BalanceDetail>>,
    pub livemode: Option<bool>,
    pub updated: Option<Timestamp>,
}

impl Balance {
    /// The available amount for one asset.
    pub fn available_for(&self, asset_id: &str) -> Option<&AmountValue> {
        self.available
            .as_deref()?
            .iter()
            .find(|d| d.asset_id.as_deref() == Some(asset_id))?
            .amount
            .as_ref()
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceDetail {
    pub asset_id: Option<String>,
    pub amount: Option<AmountValue>,
}
