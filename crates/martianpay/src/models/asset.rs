//! Assets, asset amounts and AML screening results.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use martianpay_core::{
    api_enum,
    types::{AmountValue, Timestamp},
};

use crate::concepts::api_resource;

/// A currency or token the platform can price, collect or pay out.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Asset identifier, e.g. `"USDC-Ethereum"` or `"USD"`.
    pub id: String,
    pub object: Option<String>,
    /// Ticker symbol, e.g. `"USDC"`.
    pub symbol: Option<String>,
    pub display_name: Option<String>,
    /// Blockchain network for tokens; absent for fiat.
    pub network: Option<String>,
    /// The underlying coin shared by the same token on different networks.
    pub coin: Option<String>,
    /// Number of decimal places in one whole unit, 2 for USD and up to 18 for tokens.
    pub decimals: Option<u32>,
    pub contract_address: Option<String>,
    pub chain_id: Option<i64>,
    pub is_fiat: Option<bool>,
    pub is_mainnet: Option<bool>,
    /// Whether customers can pay with this asset.
    pub payable: Option<bool>,
    /// Smallest amount accepted in a single payment.
    pub min_amount: Option<AmountValue>,
    pub icon_url: Option<String>,
    /// Set when `is_fiat` is true.
    pub fiat: Option<Fiat>,
}

api_resource!(Asset, "asset");

impl Asset {
    /// Converts an amount of this asset to smallest units using its `decimals`.
    ///
    /// Returns `None` when the asset does not declare its decimals.
    pub fn to_minor_units(
        &self,
        amount: &AmountValue,
    ) -> Option<martianpay_core::errors::Result<i128>> {
        self.decimals.map(|d| amount.to_minor_units(d))
    }
}

/// An amount denominated in a specific asset.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetAmount {
    pub amount: Option<AmountValue>,
    pub asset_id: Option<String>,
}

impl AssetAmount {
    pub fn new(amount: impl Into<AmountValue>, asset_id: impl Into<String>) -> Self {
        AssetAmount {
            amount: Some(amount.into()),
            asset_id: Some(asset_id.into()),
        }
    }
}

/// Fiat currency details.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fiat {
    /// ISO 4217 code.
    pub currency_code: Option<String>,
    pub symbol: Option<String>,
    pub decimals: Option<u32>,
    /// ISO 3166-1 alpha-2 country code.
    pub country: Option<String>,
}

api_enum! {
    /// Risk level assigned by AML screening.
    pub enum AmlRiskLevel {
        Low => "low",
        Medium => "medium",
        High => "high",
        Severe => "severe",
    }
}

api_enum! {
    /// Outcome of AML screening for an address or transaction.
    pub enum AmlStatus {
        Pending => "pending",
        Approved => "approved",
        /// Funds are held until compliance review completes.
        Frozen => "frozen",
        Rejected => "rejected",
    }
}

/// Anti-money-laundering screening result attached to transactions and addresses.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmlInfo {
    pub address: Option<String>,
    pub network: Option<String>,
    /// 0 (clean) to 100 (certainly illicit).
    pub risk_score: Option<u32>,
    pub risk_level: Option<AmlRiskLevel>,
    pub status: Option<AmlStatus>,
    pub triggered_rules: Option<Vec<AmlRule>>,
    pub checked_at: Option<Timestamp>,
}

impl AmlInfo {
    pub fn is_frozen(&self) -> bool {
        self.status == Some(AmlStatus::Frozen)
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmlRule {
    pub rule_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub risk_level: Option<AmlRiskLevel>,
}
