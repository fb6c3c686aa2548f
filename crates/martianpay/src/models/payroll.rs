//! Payroll: batches of payouts to many recipients.
//!
//! A [`Payroll`] groups [`PayrollItems`], one per recipient. Each item is priced and
//! tracked on its own, and an item paid in a different asset than the merchant's balance
//! carries a [`PayrollSwapItems`] record for the conversion.

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use martianpay_core::{
    api_enum,
    errors::{Error, Result},
    types::{AmountValue, Decimal, Metadata, Timestamp},
};

use crate::{
    concepts::{GeneratedId, api_resource, generated_id},
    models::asset::{AmlInfo, AssetAmount},
};

api_enum! {
    pub enum PayrollStatus {
        Draft => "draft",
        PendingApproval => "pending_approval",
        Approved => "approved",
        Processing => "processing",
        Completed => "completed",
        /// Some items succeeded and some failed.
        PartiallyCompleted => "partially_completed",
        Failed => "failed",
        Canceled => "canceled",
    }
}

api_enum! {
    pub enum PayrollItemStatus {
        Pending => "pending",
        Swapping => "swapping",
        Processing => "processing",
        Succeeded => "succeeded",
        Failed => "failed",
        Canceled => "canceled",
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payroll {
    pub id: String,
    pub object: Option<String>,
    /// Merchant's reference for the batch.
    pub external_id: Option<String>,
    pub status: Option<PayrollStatus>,
    pub items: Option<Vec<PayrollItems>>,
    pub total_amount: Option<AssetAmount>,
    pub total_fee: Option<AssetAmount>,
    pub item_count: Option<u32>,
    pub succeeded_count: Option<u32>,
    pub failed_count: Option<u32>,
    /// Member ID of the approver.
    pub approved_by: Option<String>,
    pub approved_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
    pub metadata: Option<Metadata>,
    pub created: Option<Timestamp>,
    pub updated: Option<Timestamp>,
    pub livemode: Option<bool>,
}

api_resource!(Payroll, "payroll");

impl Payroll {
    /// Items still waiting for a final outcome.
    pub fn outstanding_items(&self) -> impl Iterator<Item = &PayrollItems> {
        self.items.iter().flatten().filter(|item| {
            !matches!(
                item.status,
                Some(
                    PayrollItemStatus::Succeeded
                        | PayrollItemStatus::Failed
                        | PayrollItemStatus::Canceled
                )
            )
        })
    }
}

/// One recipient line of a payroll. IDs look like `pri_` followed by 36 characters.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollItems {
    pub id: String,
    pub object: Option<String>,
    pub payroll_id: Option<String>,
    pub external_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub network: Option<String>,
    /// Asset the recipient receives.
    pub asset_id: Option<String>,
    pub amount: Option<AmountValue>,
    pub fee: Option<AmountValue>,
    pub status: Option<PayrollItemStatus>,
    pub tx_id: Option<String>,
    pub failure_reason: Option<String>,
    pub aml_info: Option<AmlInfo>,
    pub swap_item: Option<PayrollSwapItems>,
    pub created: Option<Timestamp>,
    pub updated: Option<Timestamp>,
}

api_resource!(PayrollItems, "payroll_item");
generated_id!(PayrollItems, "pri_", 36);

/// Conversion from the merchant's balance asset to an item's payout asset. IDs look like
/// `prs_` followed by 36 characters.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSwapItems {
    pub id: String,
    pub object: Option<String>,
    pub payroll_id: Option<String>,
    pub payroll_item_id: Option<String>,
    pub from_asset_id: Option<String>,
    pub from_amount: Option<AmountValue>,
    pub to_asset_id: Option<String>,
    pub to_amount: Option<AmountValue>,
    pub exchange_rate: Option<AmountValue>,
    pub fee: Option<AmountValue>,
    pub status: Option<PayrollItemStatus>,
    pub tx_id: Option<String>,
    pub created: Option<Timestamp>,
    pub updated: Option<Timestamp>,
}

api_resource!(PayrollSwapItems, "payroll_swap_item");
generated_id!(PayrollSwapItems, "prs_", 36);

/// Response to a payroll confirmation: what the batch will cost and whether a second
/// approval is needed before it runs.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollConfirmResponse {
    pub payroll: Option<Payroll>,
    pub total_amount: Option<AssetAmount>,
    pub total_fee: Option<AssetAmount>,
    pub requires_approval: Option<bool>,
    pub approval_expires_at: Option<Timestamp>,
    pub insufficient_balance: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollDirectCreateResponse {
    pub payroll: Option<Payroll>,
    pub items: Option<Vec<PayrollItems>>,
    pub swap_items: Option<Vec<PayrollSwapItems>>,
    pub total_amount: Option<AssetAmount>,
    pub total_fee: Option<AssetAmount>,
}

/// One recipient in a [`PayrollDirectCreateRequest`].
#[skip_serializing_none]
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayrollItemParams {
    /// Generated client-side unless given.
    #[builder(into, default = PayrollItems::generate_id())]
    pub id: String,
    #[builder(into)]
    pub external_id: Option<String>,
    #[builder(into)]
    pub name: Option<String>,
    #[builder(into)]
    pub email: Option<String>,
    #[builder(into)]
    pub address: String,
    #[builder(into)]
    pub network: String,
    #[builder(into)]
    pub asset_id: String,
    pub amount: AmountValue,
}

/// Body of a direct payroll creation: the batch is created and submitted in one call.
#[skip_serializing_none]
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayrollDirectCreateRequest {
    #[builder(into)]
    pub external_id: String,
    /// Balance asset the batch is funded from.
    #[builder(into)]
    pub source_asset_id: Option<String>,
    pub items: Vec<PayrollItemParams>,
    pub auto_approve: Option<bool>,
    pub metadata: Option<Metadata>,
}

impl PayrollDirectCreateRequest {
    /// Sum of every item's amount, for items that all share one asset.
    ///
    /// Returns `Ok(None)` when the items mix assets.
    pub fn total_amount(&self) -> Result<Option<AmountValue>> {
        let Some(first) = self.items.first() else {
            return Ok(Some(AmountValue::zero()));
        };
        if self.items.iter().any(|item| item.asset_id != first.asset_id) {
            return Ok(None);
        }

        let mut total = Decimal::ZERO;
        for item in &self.items {
            total = total
                .checked_add(item.amount.to_decimal()?)
                .ok_or_else(|| Error::AmountOverflow(item.amount.to_string()))?;
        }
        Ok(Some(AmountValue::from(total)))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use serde_json::json;

    use super::*;
    use crate::concepts::ApiResource;

    fn amount(s: &str) -> AmountValue {
        s.parse().unwrap()
    }

    #[test]
    fn payroll_round_trip() {
        let json = json!({
            "id": "pr_77",
            "object": "payroll",
            "external_id": "june-2024",
            "status": "partially_completed",
            "items": [
                {
                    "id": "pri_aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
                    "object": "payroll_item",
                    "payroll_id": "pr_77",
                    "name": "Lin",
                    "address": "0x4444444444444444444444444444444444444444",
                    "network": "Ethereum",
                    "asset_id": "USDC-Ethereum",
                    "amount": "3200.00",
                    "fee": "1.50",
                    "status": "succeeded",
                    "tx_id": "0xccc"
                },
                {
                    "id": "pri_bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb",
                    "object": "payroll_item",
                    "payroll_id": "pr_77",
                    "asset_id": "USDT-Tron",
                    "amount": "1800",
                    "status": "swapping",
                    "swap_item": {
                        "id": "prs_cccccccccccccccccccccccccccccccccccc",
                        "object": "payroll_swap_item",
                        "from_asset_id": "USDC-Ethereum",
                        "from_amount": "1801.20",
                        "to_asset_id": "USDT-Tron",
                        "to_amount": "1800",
                        "exchange_rate": "0.99933",
                        "status": "processing"
                    }
                }
            ],
            "total_amount": {"amount": "5001.20", "asset_id": "USDC-Ethereum"},
            "total_fee": {"amount": "3.00", "asset_id": "USDC-Ethereum"},
            "item_count": 2,
            "succeeded_count": 1,
            "failed_count": 0,
            "created": 1717171717
        });

        let payroll = Payroll::from_json(&json).unwrap();
        let outstanding: Vec<&str> = payroll.outstanding_items().map(|i| i.id.as_str()).collect();
        assert_eq!(outstanding, ["pri_bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb"]);
        assert_eq!(payroll.to_json().unwrap(), json);
    }

    #[test]
    fn payroll_item_ids() {
        let item = PayrollItems::new();
        assert!(item.id.starts_with("pri_"));
        assert_eq!(item.id.len(), 40);
        assert!(PayrollItems::is_generated_id(&item.id));

        let swap = PayrollSwapItems::new();
        assert!(swap.id.starts_with("prs_"));
        assert_eq!(swap.id.len(), 40);
        assert!(!PayrollItems::is_generated_id(&swap.id));
    }

    #[test]
    fn direct_create_request() {
        let request = PayrollDirectCreateRequest::builder()
            .external_id("june-2024")
            .items(vec![
                PayrollItemParams::builder()
                    .address("0x4444444444444444444444444444444444444444")
                    .network("Ethereum")
                    .asset_id("USDC-Ethereum")
                    .amount(amount("3200.00"))
                    .name("Lin")
                    .build(),
                PayrollItemParams::builder()
                    .id("pri_fixedfixedfixedfixedfixedfixedfixedf")
                    .address("0x5555555555555555555555555555555555555555")
                    .network("Ethereum")
                    .asset_id("USDC-Ethereum")
                    .amount(amount("1800.125"))
                    .build(),
            ])
            .build();

        assert!(PayrollItems::is_generated_id(&request.items[0].id));
        assert_eq!(request.items[1].id, "pri_fixedfixedfixedfixedfixedfixedfixedf");
        assert_eq!(
            request.total_amount().unwrap().map(|a| a.to_string()),
            Some("5000.125".to_string())
        );

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["items"][1]["amount"], json!("1800.125"));
        assert!(json.get("metadata").is_none());
        assert!(json["items"][1].get("name").is_none());
    }

    #[test]
    fn mixed_assets_have_no_single_total() {
        let item = |asset: &str| {
            PayrollItemParams::builder()
                .address("addr")
                .network("net")
                .asset_id(asset)
                .amount(amount("1"))
                .build()
        };
        let request = PayrollDirectCreateRequest::builder()
            .external_id("mixed")
            .items(vec![item("USDC-Ethereum"), item("USDT-Tron")])
            .build();
        assert_eq!(request.total_amount().unwrap(), None);

        let empty = PayrollDirectCreateRequest::builder()
            .external_id("empty")
            .items(vec![])
            .build();
        assert!(empty.total_amount().unwrap().unwrap().is_zero());
    }

    #[test]
    fn generated_item_ids_do_not_repeat() {
        let ids: HashSet<String> = (0..100_000).map(|_| PayrollItems::generate_id()).collect();
        assert_eq!(ids.len(), 100_000);
    }

    #[test]
    fn responses_decode() {
        let confirm: PayrollConfirmResponse = serde_json::from_value(json!({
            "payroll": {"id": "pr_77", "object": "payroll", "status": "pending_approval"},
            "total_amount": {"amount": "5001.20", "asset_id": "USDC-Ethereum"},
            "requires_approval": true,
            "insufficient_balance": false
        }))
        .unwrap();
        assert_eq!(
            confirm.payroll.unwrap().status,
            Some(PayrollStatus::PendingApproval)
        );

        let created: PayrollDirectCreateResponse = serde_json::from_value(json!({
            "payroll": {"id": "pr_78"},
            "items": [{"id": "pri_1"}],
            "swap_items": []
        }))
        .unwrap();
        assert_eq!(created.items.unwrap().len(), 1);
        assert_eq!(created.swap_items.unwrap().len(), 0);
        assert_eq!(created.total_fee, None);
    }
}
