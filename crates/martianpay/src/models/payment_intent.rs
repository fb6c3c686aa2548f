//! Payment intents: the umbrella record for one payment across its charges.

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use martianpay_core::{
    api_enum,
    types::{AmountValue, Metadata, Timestamp},
};

use crate::{
    concepts::api_resource,
    models::{asset::AssetAmount, charge::Charge},
};

api_enum! {
    /// Lifecycle of a payment intent.
    ///
    /// `requires_payment_method` → `processing` → `succeeded`, with `partially_paid` when
    /// the customer sent less than requested and `canceled` on expiry or merchant
    /// cancellation. Transitions are decided by the server.
    pub enum PaymentIntentStatus {
        RequiresPaymentMethod => "requires_payment_method",
        RequiresConfirmation => "requires_confirmation",
        Processing => "processing",
        PartiallyPaid => "partially_paid",
        Succeeded => "succeeded",
        Canceled => "canceled",
        /// Funds arrived but are held by AML review.
        Frozen => "frozen",
    }
}

impl PaymentIntentStatus {
    /// No further transitions are expected from this status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Canceled)
    }
}

/// A payment the merchant wants to collect.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub object: Option<String>,
    /// Requested amount, usually in a fiat pricing asset.
    pub amount: Option<AssetAmount>,
    pub payment_details: Option<PaymentDetails>,
    /// Charges attempted for this intent, newest first.
    pub charges: Option<Vec<Charge>>,
    /// Customer ID.
    pub customer: Option<String>,
    pub description: Option<String>,
    pub metadata: Option<Metadata>,
    /// The merchant's own reference for the order being paid.
    pub merchant_order_id: Option<String>,
    pub receipt_email: Option<String>,
    pub status: Option<PaymentIntentStatus>,
    /// Secret for client-side confirmation. Only returned at creation.
    pub client_secret: Option<String>,
    pub payment_link_id: Option<String>,
    pub invoice_id: Option<String>,
    pub subscription_id: Option<String>,
    pub return_url: Option<String>,
    /// When set, the intent succeeds on the first charge even if it underpays.
    pub complete_on_first_payment: Option<bool>,
    pub cancellation_reason: Option<String>,
    pub canceled_at: Option<Timestamp>,
    /// After this time the server cancels an unpaid intent.
    pub expired_at: Option<Timestamp>,
    pub created: Option<Timestamp>,
    pub updated: Option<Timestamp>,
    pub livemode: Option<bool>,
}

api_resource!(PaymentIntent, "payment_intent");

impl PaymentIntent {
    /// The charge with the newest `created` time.
    ///
    /// Charges without `created` sort before dated ones. Among equal times the one later
    /// in the list wins, so list order decides only when timestamps do not.
    pub fn latest_charge(&self) -> Option<&Charge> {
        self.charges.iter().flatten().max_by_key(|charge| charge.created)
    }
}

/// Running totals for a payment intent or charge. All amounts are in the paid asset.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDetails {
    pub amount_captured: Option<AssetAmount>,
    pub amount_refunded: Option<AssetAmount>,
    /// Platform processing fee.
    pub tx_fee: Option<AssetAmount>,
    pub tax_fee: Option<AssetAmount>,
    /// Amount held by AML review.
    pub frozen_amount: Option<AssetAmount>,
    /// Captured minus refunds, fees and frozen funds.
    pub net_amount: Option<AssetAmount>,
    pub network_fee: Option<AssetAmount>,
    /// Pricing asset to paid asset rate used for this payment.
    pub exchange_rate: Option<AmountValue>,
}

/// Body of a create-payment-intent request.
#[skip_serializing_none]
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentIntentCreateParams {
    #[builder(into)]
    pub amount: AmountValue,
    /// Pricing currency or asset, e.g. `"USD"`.
    #[builder(into)]
    pub currency: String,
    #[builder(into)]
    pub customer: Option<String>,
    #[builder(into)]
    pub description: Option<String>,
    #[builder(into)]
    pub merchant_order_id: Option<String>,
    #[builder(into)]
    pub receipt_email: Option<String>,
    #[builder(into)]
    pub return_url: Option<String>,
    pub complete_on_first_payment: Option<bool>,
    pub metadata: Option<Metadata>,
}
