//! Selling plans: recurring-billing templates attached to products and variants.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use martianpay_core::{
    api_enum,
    errors::{Error, Result},
    types::{AmountValue, Decimal, RoundingStrategy, Timestamp},
};

use crate::concepts::{ApiResource, api_resource};

api_enum! {
    pub enum BillingInterval {
        Day => "day",
        Week => "week",
        Month => "month",
        Year => "year",
    }
}

api_enum! {
    /// How a billing anchor's `day` is interpreted.
    pub enum BillingAnchorType {
        /// `day` is 1 (Monday) to 7 (Sunday).
        Weekday => "weekday",
        /// `day` is 1 to 31, clamped to the month's last day.
        Monthday => "monthday",
        /// `day` and `month` name a calendar date.
        Yearday => "yearday",
    }
}

api_enum! {
    pub enum PricingAdjustmentType {
        /// `adjustment_value` is a percentage taken off the base price.
        Percentage => "percentage",
        /// `adjustment_value` is subtracted from the base price.
        FixedAmount => "fixed_amount",
        /// `adjustment_value` replaces the base price.
        Price => "price",
    }
}

api_enum! {
    pub enum ProrationBehavior {
        CreateProrations => "create_prorations",
        None => "none",
        AlwaysInvoice => "always_invoice",
    }
}

api_enum! {
    pub enum SellingPlanStatus {
        Active => "active",
        Inactive => "inactive",
        Archived => "archived",
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellingPlan {
    pub id: String,
    pub object: Option<String>,
    pub selling_plan_group_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub billing_policy: Option<SellingPlanBillingPolicy>,
    /// Price adjustments, possibly tiered by billing cycle.
    pub pricing_policies: Option<Vec<SellingPlanPricingPolicy>>,
    pub trial: Option<SellingPlanTrial>,
    pub proration_behavior: Option<ProrationBehavior>,
    pub status: Option<SellingPlanStatus>,
    /// Display order inside the group.
    pub position: Option<u32>,
    pub created: Option<Timestamp>,
    pub updated: Option<Timestamp>,
}

api_resource!(SellingPlan, "selling_plan");

impl SellingPlan {
    /// The pricing policy in effect for a 1-based billing `cycle`.
    ///
    /// A policy with `after_cycle = k` applies from cycle `k + 1` on; a policy without
    /// `after_cycle` applies from the first cycle. The latest applicable tier wins.
    pub fn pricing_policy_for_cycle(&self, cycle: u32) -> Option<&SellingPlanPricingPolicy> {
        self.pricing_policies
            .iter()
            .flatten()
            .filter(|p| p.after_cycle.unwrap_or(0) < cycle)
            .max_by_key(|p| p.after_cycle.unwrap_or(0))
    }

    /// The price charged in a billing `cycle`, given the variant's base price.
    ///
    /// Without an applicable policy this is the base price.
    pub fn price_for_cycle(&self, base_price: &AmountValue, cycle: u32) -> Result<AmountValue> {
        match self.pricing_policy_for_cycle(cycle) {
            Some(policy) => policy.apply(base_price),
            None => Ok(base_price.clone()),
        }
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellingPlanBillingPolicy {
    pub interval: Option<BillingInterval>,
    /// Number of intervals per cycle, e.g. 3 months.
    pub interval_count: Option<u32>,
    pub anchors: Option<Vec<BillingAnchor>>,
    pub min_cycles: Option<u32>,
    pub max_cycles: Option<u32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingAnchor {
    #[serde(rename = "type")]
    pub anchor_type: Option<BillingAnchorType>,
    pub day: Option<u32>,
    /// Only for `yearday` anchors.
    pub month: Option<u32>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellingPlanPricingPolicy {
    pub adjustment_type: Option<PricingAdjustmentType>,
    pub adjustment_value: Option<AmountValue>,
    /// Number of completed cycles after which this tier starts.
    pub after_cycle: Option<u32>,
}

impl SellingPlanPricingPolicy {
    /// Applies this adjustment to `base_price`.
    ///
    /// Percentage and fixed adjustments keep the base price's decimal places and never
    /// go below zero. Unknown adjustment types leave the price unchanged.
    pub fn apply(&self, base_price: &AmountValue) -> Result<AmountValue> {
        let (Some(kind), Some(value)) = (&self.adjustment_type, &self.adjustment_value) else {
            return Ok(base_price.clone());
        };

        match kind {
            PricingAdjustmentType::Price => return Ok(value.clone()),
            PricingAdjustmentType::Other(_) => return Ok(base_price.clone()),
            _ => {}
        }

        let scale = base_price.scale();
        let base = base_price.to_decimal()?;
        let adjustment = value.to_decimal()?;
        let adjusted = match kind {
            PricingAdjustmentType::Percentage => Decimal::ONE_HUNDRED
                .checked_sub(adjustment)
                .and_then(|pct| base.checked_mul(pct))
                .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED)),
            _ => base.checked_sub(adjustment),
        }
        .ok_or_else(|| Error::AmountOverflow(base_price.to_string()))?;

        let mut adjusted = adjusted
            .max(Decimal::ZERO)
            .round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
        adjusted.rescale(scale);
        Ok(AmountValue::from(adjusted))
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellingPlanTrial {
    pub interval: Option<BillingInterval>,
    pub interval_count: Option<u32>,
    /// Price during the trial; absent means free.
    pub price: Option<AmountValue>,
}

/// A selling plan as returned by the API, with pricing previews for a product.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellingPlanResponse {
    #[serde(flatten)]
    pub selling_plan: SellingPlan,
    pub selling_plan_group_name: Option<String>,
    pub currency: Option<String>,
    pub price_preview: Option<Vec<PricePreview>>,
}

impl ApiResource for SellingPlanResponse {
    const OBJECT: &'static str = SellingPlan::OBJECT;

    fn id(&self) -> &str {
        &self.selling_plan.id
    }

    fn object(&self) -> Option<&str> {
        self.selling_plan.object.as_deref()
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePreview {
    pub cycle: Option<u32>,
    pub price: Option<AmountValue>,
}

/// A named set of selling plans offered together, e.g. "Subscribe and save".
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellingPlanGroup {
    pub id: String,
    pub object: Option<String>,
    pub name: Option<String>,
    pub merchant_code: Option<String>,
    pub description: Option<String>,
    pub options: Option<Vec<String>>,
    pub product_ids: Option<Vec<String>>,
    pub variant_ids: Option<Vec<String>>,
    pub created: Option<Timestamp>,
    pub updated: Option<Timestamp>,
}

api_resource!(SellingPlanGroup, "selling_plan_group");

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellingPlanGroupWithPlans {
    #[serde(flatten)]
    pub group: SellingPlanGroup,
    pub selling_plans: Option<Vec<SellingPlan>>,
}

impl ApiResource for SellingPlanGroupWithPlans {
    const OBJECT: &'static str = SellingPlanGroup::OBJECT;

    fn id(&self) -> &str {
        &self.group.id
    }

    fn object(&self) -> Option<&str> {
        self.group.object.as_deref()
    }
}

impl SellingPlanGroupWithPlans {
    pub fn active_plans(&self) -> impl Iterator<Item = &SellingPlan> {
        self.selling_plans
            .iter()
            .flatten()
            .filter(|p| {
                !matches!(
                    p.status,
                    Some(SellingPlanStatus::Inactive | SellingPlanStatus::Archived)
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn amount(s: &str) -> AmountValue {
        s.parse().unwrap()
    }

    fn tiered_plan() -> SellingPlan {
        SellingPlan::from_json(&json!({
            "id": "sp_monthly",
            "object": "selling_plan",
            "selling_plan_group_id": "spg_coffee_club",
            "name": "Monthly, 10% off then 15% off after 3 deliveries",
            "billing_policy": {
                "interval": "month",
                "interval_count": 1,
                "anchors": [{"type": "monthday", "day": 15}],
                "min_cycles": 3
            },
            "pricing_policies": [
                {"adjustment_type": "percentage", "adjustment_value": "10"},
                {"adjustment_type": "percentage", "adjustment_value": "15", "after_cycle": 3}
            ],
            "trial": {"interval": "day", "interval_count": 14},
            "proration_behavior": "create_prorations",
            "status": "active",
            "position": 1,
            "created": 1700000000
        }))
        .unwrap()
    }

    #[test]
    fn selling_plan_round_trip() {
        let plan = tiered_plan();
        let policy = plan.billing_policy.as_ref().unwrap();
        assert_eq!(policy.interval, Some(BillingInterval::Month));
        assert_eq!(
            policy.anchors.as_ref().unwrap()[0].anchor_type,
            Some(BillingAnchorType::Monthday)
        );

        let json = plan.to_json().unwrap();
        assert_eq!(json["billing_policy"]["anchors"][0]["type"], json!("monthday"));
        assert_eq!(SellingPlan::from_json(&json).unwrap(), plan);
    }

    #[test]
    fn pricing_tiers_by_cycle() {
        let plan = tiered_plan();
        let base = amount("29.00");

        assert_eq!(plan.price_for_cycle(&base, 1).unwrap().as_str(), "26.10");
        assert_eq!(plan.price_for_cycle(&base, 3).unwrap().as_str(), "26.10");
        assert_eq!(plan.price_for_cycle(&base, 4).unwrap().as_str(), "24.65");
        assert_eq!(plan.price_for_cycle(&base, 40).unwrap().as_str(), "24.65");
    }

    #[test]
    fn fixed_and_replacement_adjustments() {
        let fixed = SellingPlanPricingPolicy {
            adjustment_type: Some(PricingAdjustmentType::FixedAmount),
            adjustment_value: Some(amount("5")),
            after_cycle: None,
        };
        assert_eq!(fixed.apply(&amount("29.00")).unwrap().as_str(), "24.00");
        assert_eq!(fixed.apply(&amount("3.00")).unwrap().as_str(), "0.00");

        let price = SellingPlanPricingPolicy {
            adjustment_type: Some(PricingAdjustmentType::Price),
            adjustment_value: Some(amount("19.99")),
            after_cycle: Some(1),
        };
        assert_eq!(price.apply(&amount("29.00")).unwrap().as_str(), "19.99");

        let unknown = SellingPlanPricingPolicy {
            adjustment_type: Some(PricingAdjustmentType::Other("bogo".into())),
            adjustment_value: Some(amount("1")),
            after_cycle: None,
        };
        assert_eq!(unknown.apply(&amount("29.00")).unwrap().as_str(), "29.00");
    }

    #[test]
    fn no_policies_means_base_price() {
        let plan = SellingPlan::default();
        assert!(plan.pricing_policy_for_cycle(1).is_none());
        assert_eq!(plan.price_for_cycle(&amount("9.5"), 2).unwrap().as_str(), "9.5");
    }

    #[test]
    fn response_flattens_the_plan() {
        let json = json!({
            "id": "sp_monthly",
            "object": "selling_plan",
            "name": "Monthly",
            "status": "active",
            "selling_plan_group_name": "Coffee club",
            "currency": "USD",
            "price_preview": [{"cycle": 1, "price": "26.10"}, {"cycle": 4, "price": "24.65"}]
        });

        let response = SellingPlanResponse::from_json(&json).unwrap();
        assert_eq!(response.id(), "sp_monthly");
        assert_eq!(response.selling_plan.name.as_deref(), Some("Monthly"));
        assert_eq!(response.price_preview.as_ref().unwrap().len(), 2);
        assert_eq!(response.to_json().unwrap(), json);
    }

    #[test]
    fn group_with_plans() {
        let json = json!({
            "id": "spg_coffee_club",
            "object": "selling_plan_group",
            "name": "Coffee club",
            "options": ["Delivery every"],
            "product_ids": ["prod_beans"],
            "selling_plans": [
                {"id": "sp_monthly", "object": "selling_plan", "status": "active"},
                {"id": "sp_weekly", "object": "selling_plan", "status": "archived"}
            ]
        });

        let group = SellingPlanGroupWithPlans::from_json(&json).unwrap();
        assert_eq!(group.id(), "spg_coffee_club");
        let active: Vec<&str> = group.active_plans().map(|p| p.id.as_str()).collect();
        assert_eq!(active, ["sp_monthly"]);
        assert_eq!(group.to_json().unwrap(), json);
    }
}
