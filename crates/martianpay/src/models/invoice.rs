//! Invoices and their flattened `InvoiceDetails` projection.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use martianpay_core::{
    api_enum,
    types::{AmountValue, Metadata, Timestamp},
};

use crate::concepts::api_resource;

api_enum! {
    pub enum InvoiceStatus {
        Draft => "draft",
        Open => "open",
        Paid => "paid",
        Void => "void",
        Uncollectible => "uncollectible",
    }
}

api_enum! {
    pub enum BillingReason {
        Manual => "manual",
        SubscriptionCreate => "subscription_create",
        SubscriptionCycle => "subscription_cycle",
        SubscriptionUpdate => "subscription_update",
    }
}

api_enum! {
    pub enum CollectionMethod {
        /// The customer pays a hosted invoice page.
        SendInvoice => "send_invoice",
        /// The platform collects from a pre-authorized payment method.
        ChargeAutomatically => "charge_automatically",
    }
}

/// A bill for one-off items or a subscription period.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: String,
    pub object: Option<String>,
    /// Human readable invoice number, e.g. `"MP-0001-0042"`.
    pub number: Option<String>,
    /// Customer ID.
    pub customer: Option<String>,
    /// Subscription ID for recurring invoices.
    pub subscription: Option<String>,
    pub payment_intent_id: Option<String>,
    pub status: Option<InvoiceStatus>,
    pub billing_reason: Option<BillingReason>,
    pub collection_method: Option<CollectionMethod>,
    /// Pricing currency of every amount on the invoice.
    pub currency: Option<String>,
    pub subtotal: Option<AmountValue>,
    pub tax: Option<AmountValue>,
    pub total: Option<AmountValue>,
    pub amount_due: Option<AmountValue>,
    pub amount_paid: Option<AmountValue>,
    pub amount_remaining: Option<AmountValue>,
    pub lines: Option<Vec<InvoiceLineItem>>,
    pub period_start: Option<Timestamp>,
    pub period_end: Option<Timestamp>,
    pub due_date: Option<Timestamp>,
    pub hosted_invoice_url: Option<String>,
    pub invoice_pdf: Option<String>,
    pub attempt_count: Option<u32>,
    pub next_payment_attempt: Option<Timestamp>,
    pub paid_at: Option<Timestamp>,
    pub voided_at: Option<Timestamp>,
    pub description: Option<String>,
    pub metadata: Option<Metadata>,
    pub created: Option<Timestamp>,
    pub updated: Option<Timestamp>,
    pub livemode: Option<bool>,
}

api_resource!(Invoice, "invoice");

impl Invoice {
    pub fn is_paid(&self) -> bool {
        self.status == Some(InvoiceStatus::Paid)
    }

    /// Whether the invoice is open and past its due date at `now`.
    pub fn is_overdue_at(&self, now: Timestamp) -> bool {
        self.status == Some(InvoiceStatus::Open) && self.due_date.is_some_and(|due| due < now)
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLineItem {
    pub id: Option<String>,
    pub description: Option<String>,
    pub product_id: Option<String>,
    pub variant_id: Option<String>,
    pub selling_plan_id: Option<String>,
    pub quantity: Option<u32>,
    pub unit_amount: Option<AmountValue>,
    pub amount: Option<AmountValue>,
    /// Set on credit/debit lines created by a mid-period plan change.
    pub proration: Option<bool>,
    pub period_start: Option<Timestamp>,
    pub period_end: Option<Timestamp>,
}

/// Invoice summary returned by list and lookup endpoints.
///
/// A separate wire contract from [`Invoice`]: references carry an `_id` suffix and some
/// customer fields are inlined. Neither type is derived from the other.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceDetails {
    pub id: String,
    pub object: Option<String>,
    pub number: Option<String>,
    pub customer_id: Option<String>,
    pub customer_email: Option<String>,
    pub customer_name: Option<String>,
    pub subscription_id: Option<String>,
    pub payment_intent_id: Option<String>,
    pub status: Option<InvoiceStatus>,
    pub billing_reason: Option<BillingReason>,
    pub currency: Option<String>,
    pub total: Option<AmountValue>,
    pub amount_due: Option<AmountValue>,
    pub amount_paid: Option<AmountValue>,
    pub period_start: Option<Timestamp>,
    pub period_end: Option<Timestamp>,
    pub due_date: Option<Timestamp>,
    pub hosted_invoice_url: Option<String>,
    pub paid_at: Option<Timestamp>,
    pub created: Option<Timestamp>,
}

api_resource!(InvoiceDetails, "invoice");
