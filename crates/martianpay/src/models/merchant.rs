//! Merchant accounts, their payout addresses and their fee contracts.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use martianpay_core::{
    api_enum,
    types::{AmountValue, Metadata, Timestamp},
};

use crate::{
    concepts::{api_resource, generated_id},
    models::asset::{AmlInfo, AssetAmount},
};

api_enum! {
    pub enum MerchantAccountStatus {
        Pending => "pending",
        /// KYB review passed; the account can accept payments.
        Active => "active",
        Restricted => "restricted",
        Suspended => "suspended",
        Closed => "closed",
    }
}

api_enum! {
    /// Know-your-business review of a merchant account.
    pub enum KybStatus {
        NotStarted => "not_started",
        Pending => "pending",
        Approved => "approved",
        Rejected => "rejected",
    }
}

/// A merchant on the platform. IDs look like `ma_` followed by 24 characters.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantAccount {
    pub id: String,
    pub object: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    pub country: Option<String>,
    pub status: Option<MerchantAccountStatus>,
    /// Know-your-business verification state as reported by the compliance provider.
    pub kyb_status: Option<KybStatus>,
    /// Asset that settlements are converted into unless a contract says otherwise.
    pub default_settlement_asset: Option<String>,
    pub metadata: Option<Metadata>,
    pub created: Option<Timestamp>,
    pub updated: Option<Timestamp>,
    pub livemode: Option<bool>,
}

api_resource!(MerchantAccount, "merchant_account");
generated_id!(MerchantAccount, "ma_", 24);

api_enum! {
    pub enum MerchantAddressStatus {
        Created => "created",
        Verifying => "verifying",
        Verified => "verified",
        Failed => "failed",
        Deleted => "deleted",
    }
}

/// A blockchain address registered by the merchant to receive payouts and withdrawals.
///
/// An address becomes `verified` once the merchant proves control of it, usually with a
/// small test transfer described by [`AddressVerification`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantAddress {
    pub id: String,
    pub object: Option<String>,
    pub network: Option<String>,
    pub address: Option<String>,
    /// Human readable label chosen by the merchant.
    pub alias: Option<String>,
    pub status: Option<MerchantAddressStatus>,
    pub verification: Option<AddressVerification>,
    pub aml_info: Option<AmlInfo>,
    pub created: Option<Timestamp>,
    pub updated: Option<Timestamp>,
}

api_resource!(MerchantAddress, "merchant_address");

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressVerification {
    pub id: Option<String>,
    pub status: Option<MerchantAddressStatus>,
    /// The exact amount the merchant must send from the address.
    pub amount: Option<AssetAmount>,
    /// Hash of the verifying transfer, once seen on chain.
    pub tx_id: Option<String>,
    pub aml_info: Option<AmlInfo>,
    pub expires_at: Option<Timestamp>,
    pub verified_at: Option<Timestamp>,
}

api_enum! {
    pub enum ContractStatus {
        Draft => "draft",
        PendingSignature => "pending_signature",
        Active => "active",
        Expired => "expired",
        Terminated => "terminated",
    }
}

/// Pricing agreed between the platform and a merchant. IDs look like `mc_` followed by
/// 24 characters.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantContract {
    pub id: String,
    pub object: Option<String>,
    pub merchant_account_id: Option<String>,
    pub contract_type: Option<String>,
    /// Percentage fee as a decimal fraction, e.g. `"0.008"` for 0.8%.
    pub fee_rate: Option<AmountValue>,
    pub fixed_fee: Option<AssetAmount>,
    pub settlement_asset_id: Option<String>,
    /// Days between capture and settlement.
    pub settlement_period_days: Option<u32>,
    pub status: Option<ContractStatus>,
    pub effective_from: Option<Timestamp>,
    pub effective_to: Option<Timestamp>,
    pub signed_at: Option<Timestamp>,
    pub metadata: Option<Metadata>,
    pub created: Option<Timestamp>,
    pub updated: Option<Timestamp>,
}

api_resource!(MerchantContract, "merchant_contract");
generated_id!(MerchantContract, "mc_", 24);

impl MerchantContract {
    /// Whether the contract is in force at `at`, judging by its status and dates.
    pub fn is_effective_at(&self, at: Timestamp) -> bool {
        self.status == Some(ContractStatus::Active)
            && self.effective_from.is_none_or(|from| from <= at)
            && self.effective_to.is_none_or(|to| at < to)
    }
}
