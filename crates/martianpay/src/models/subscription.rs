//! Subscriptions and their flattened `SubscriptionDetails` projection.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use martianpay_core::{
    api_enum,
    types::{Metadata, Timestamp},
};

use crate::{
    concepts::api_resource,
    models::{
        asset::AssetAmount,
        invoice::CollectionMethod,
        selling_plan::{BillingInterval, ProrationBehavior},
    },
};

api_enum! {
    pub enum SubscriptionStatus {
        Incomplete => "incomplete",
        IncompleteExpired => "incomplete_expired",
        Trialing => "trialing",
        Active => "active",
        PastDue => "past_due",
        Unpaid => "unpaid",
        Paused => "paused",
        Canceled => "canceled",
    }
}

impl SubscriptionStatus {
    /// Whether the customer currently has access to the subscribed goods or service.
    pub fn grants_access(&self) -> bool {
        matches!(self, Self::Trialing | Self::Active | Self::PastDue)
    }
}

api_enum! {
    /// What happens to invoices while collection is paused.
    pub enum PauseBehavior {
        KeepAsDraft => "keep_as_draft",
        MarkUncollectible => "mark_uncollectible",
        Void => "void",
    }
}

/// A customer's recurring purchase of a variant on a selling plan.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: String,
    pub object: Option<String>,
    /// Customer ID.
    pub customer: Option<String>,
    pub status: Option<SubscriptionStatus>,
    pub selling_plan_id: Option<String>,
    pub product_id: Option<String>,
    pub variant_id: Option<String>,
    pub quantity: Option<u32>,
    pub currency: Option<String>,
    pub current_period_start: Option<Timestamp>,
    pub current_period_end: Option<Timestamp>,
    pub billing_cycle_anchor: Option<Timestamp>,
    /// Number of billing cycles completed so far.
    pub cycle_count: Option<u32>,
    pub trial_start: Option<Timestamp>,
    pub trial_end: Option<Timestamp>,
    pub cancel_at_period_end: Option<bool>,
    pub cancel_at: Option<Timestamp>,
    pub canceled_at: Option<Timestamp>,
    pub cancellation_reason: Option<String>,
    pub ended_at: Option<Timestamp>,
    pub pause_collection: Option<PauseCollection>,
    /// Invoice ID of the most recent invoice.
    pub latest_invoice: Option<String>,
    pub pending_update: Option<SubscriptionPendingUpdate>,
    pub proration_behavior: Option<ProrationBehavior>,
    pub collection_method: Option<CollectionMethod>,
    pub metadata: Option<Metadata>,
    pub created: Option<Timestamp>,
    pub updated: Option<Timestamp>,
    pub livemode: Option<bool>,
}

api_resource!(Subscription, "subscription");

impl Subscription {
    pub fn is_trialing_at(&self, now: Timestamp) -> bool {
        match (self.trial_start, self.trial_end) {
            (Some(start), Some(end)) => start <= now && now < end,
            _ => false,
        }
    }

    /// The 1-based billing cycle the current period belongs to.
    ///
    /// `None` when the cycle count is missing or already at `u32::MAX`.
    pub fn current_cycle(&self) -> Option<u32> {
        self.cycle_count.and_then(|completed| completed.checked_add(1))
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauseCollection {
    pub behavior: Option<PauseBehavior>,
    pub resumes_at: Option<Timestamp>,
}

/// A change to a subscription that takes effect once its next invoice is paid.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionPendingUpdate {
    pub selling_plan_id: Option<String>,
    pub variant_id: Option<String>,
    pub quantity: Option<u32>,
    pub billing_cycle_anchor: Option<Timestamp>,
    pub proration_behavior: Option<ProrationBehavior>,
    pub effective_at: Option<Timestamp>,
    /// The update is discarded if not applied by this time.
    pub expires_at: Option<Timestamp>,
}

/// Subscription summary returned by list and customer-portal endpoints.
///
/// A separate wire contract from [`Subscription`], with display names and the current
/// price inlined and references suffixed with `_id`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionDetails {
    pub id: String,
    pub object: Option<String>,
    pub customer_id: Option<String>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub status: Option<SubscriptionStatus>,
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub variant_id: Option<String>,
    pub variant_title: Option<String>,
    pub selling_plan_id: Option<String>,
    pub selling_plan_name: Option<String>,
    pub billing_interval: Option<BillingInterval>,
    pub billing_interval_count: Option<u32>,
    pub quantity: Option<u32>,
    pub current_price: Option<AssetAmount>,
    pub current_period_start: Option<Timestamp>,
    pub current_period_end: Option<Timestamp>,
    pub next_billing_date: Option<Timestamp>,
    pub cancel_at_period_end: Option<bool>,
    pub latest_invoice_id: Option<String>,
    pub pending_update: Option<SubscriptionPendingUpdate>,
    pub created: Option<Timestamp>,
}

api_resource!(SubscriptionDetails, "subscription");

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::concepts::ApiResource;

    #[test]
    fn subscription_round_trip() {
        let json = json!({
            "id": "sub_2Tq",
            "object": "subscription",
            "customer": "cus_8Hs2kP0qLmZ3xYt7Vb1nQw4e",
            "status": "active",
            "selling_plan_id": "sp_monthly",
            "product_id": "prod_beans",
            "variant_id": "var_250",
            "quantity": 2,
            "currency": "USD",
            "current_period_start": 1717171717,
            "current_period_end": 1719763717,
            "billing_cycle_anchor": 1714579717,
            "cycle_count": 1,
            "cancel_at_period_end": false,
            "pause_collection": {"behavior": "keep_as_draft", "resumes_at": 1720000000},
            "latest_invoice": "in_5Gx",
            "pending_update": {
                "selling_plan_id": "sp_quarterly",
                "proration_behavior": "none",
                "expires_at": 1717258117
            },
            "proration_behavior": "create_prorations",
            "collection_method": "send_invoice",
            "created": 1714579717,
            "livemode": true
        });

        let sub = Subscription::from_json(&json).unwrap();
        assert!(sub.status.as_ref().unwrap().grants_access());
        assert_eq!(sub.current_cycle(), Some(2));
        assert_eq!(
            sub.pending_update.as_ref().unwrap().proration_behavior,
            Some(ProrationBehavior::None)
        );
        assert_eq!(sub.to_json().unwrap(), json);
    }

    #[test]
    fn trial_window() {
        let sub = Subscription {
            status: Some(SubscriptionStatus::Trialing),
            trial_start: Some(Timestamp(10)),
            trial_end: Some(Timestamp(20)),
            ..Default::default()
        };
        assert!(sub.is_trialing_at(Timestamp(10)));
        assert!(!sub.is_trialing_at(Timestamp(20)));
        assert!(!Subscription::default().is_trialing_at(Timestamp(15)));
    }

    #[test]
    fn current_cycle_at_the_counter_limit() {
        let sub = Subscription::from_json(&json!({"id": "sub_3", "cycle_count": 4294967295_u32}))
            .unwrap();
        assert_eq!(sub.current_cycle(), None);
        assert_eq!(Subscription::default().current_cycle(), None);
    }

    #[test]
    fn canceled_does_not_grant_access() {
        assert!(!SubscriptionStatus::Canceled.grants_access());
        assert!(!SubscriptionStatus::Paused.grants_access());
    }

    #[test]
    fn details_round_trip() {
        let json = json!({
            "id": "sub_2Tq",
            "object": "subscription",
            "customer_id": "cus_8Hs2kP0qLmZ3xYt7Vb1nQw4e",
            "customer_name": "Ada Lovelace",
            "status": "past_due",
            "product_name": "House blend",
            "variant_title": "250g",
            "selling_plan_name": "Monthly",
            "billing_interval": "month",
            "billing_interval_count": 1,
            "current_price": {"amount": "26.10", "asset_id": "USD"},
            "next_billing_date": 1719763717,
            "latest_invoice_id": "in_5Gx"
        });

        let details = SubscriptionDetails::from_json(&json).unwrap();
        assert_eq!(details.billing_interval, Some(BillingInterval::Month));
        assert_eq!(details.to_json().unwrap(), json);
    }
}
