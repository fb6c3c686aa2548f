//! Webhook events.
//!
//! An [`Event`] carries the affected resource in `data.object` as an untyped document. The
//! resource's type is only known from the event's `type`, so decoding is two-pass: keep
//! the raw map, then call [`Event::decode_object`] to get a typed [`EventObject`].
//!
//! ```
//! use martianpay::models::event::{Event, EventObject, EventType};
//!
//! let event = Event::from_json_str(r#"{
//!     "id": "evt_1",
//!     "object": "event",
//!     "type": "invoice.paid",
//!     "data": {"object": {"id": "in_1", "object": "invoice", "status": "paid"}}
//! }"#).unwrap();
//!
//! assert_eq!(event.event_type, Some(EventType::InvoicePaid));
//! match event.decode_object().unwrap() {
//!     EventObject::Invoice(invoice) => assert!(invoice.is_paid()),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use martianpay_core::{
    api_enum,
    errors::Result,
    types::{AnyJson, JsonObject, Timestamp},
};

use crate::{
    concepts::{ApiResource, api_resource},
    models::{
        charge::Charge, customer::Customer, invoice::Invoice, member::Member,
        merchant::MerchantAddress, order::Order, payment_intent::PaymentIntent,
        payment_link::PaymentLink, payout::Payout, payroll::Payroll, product::Product,
        refund::Refund, settlement::Settlement, subscription::Subscription,
        transaction::Transaction, withdraw::Withdraw,
    },
};

api_enum! {
    pub enum EventType {
        PaymentIntentCreated => "payment_intent.created",
        PaymentIntentProcessing => "payment_intent.processing",
        PaymentIntentPartiallyPaid => "payment_intent.partially_paid",
        PaymentIntentSucceeded => "payment_intent.succeeded",
        PaymentIntentPaymentFailed => "payment_intent.payment_failed",
        PaymentIntentCanceled => "payment_intent.canceled",

        ChargePending => "charge.pending",
        ChargeSucceeded => "charge.succeeded",
        ChargeFailed => "charge.failed",
        ChargeUpdated => "charge.updated",
        ChargeRefunded => "charge.refunded",

        RefundCreated => "refund.created",
        RefundUpdated => "refund.updated",
        RefundSucceeded => "refund.succeeded",
        RefundFailed => "refund.failed",

        PayoutCreated => "payout.created",
        PayoutUpdated => "payout.updated",
        PayoutPaid => "payout.paid",
        PayoutFailed => "payout.failed",
        PayoutCanceled => "payout.canceled",

        InvoiceCreated => "invoice.created",
        InvoiceFinalized => "invoice.finalized",
        InvoiceUpcoming => "invoice.upcoming",
        InvoicePaid => "invoice.paid",
        InvoicePaymentFailed => "invoice.payment_failed",
        InvoiceVoided => "invoice.voided",

        SubscriptionCreated => "subscription.created",
        SubscriptionUpdated => "subscription.updated",
        SubscriptionTrialWillEnd => "subscription.trial_will_end",
        SubscriptionPaused => "subscription.paused",
        SubscriptionResumed => "subscription.resumed",
        SubscriptionCanceled => "subscription.canceled",

        CustomerCreated => "customer.created",
        CustomerUpdated => "customer.updated",
        CustomerDeleted => "customer.deleted",

        PayrollCreated => "payroll.created",
        PayrollApproved => "payroll.approved",
        PayrollCompleted => "payroll.completed",
        PayrollFailed => "payroll.failed",
        PayrollCanceled => "payroll.canceled",

        WithdrawCreated => "withdraw.created",
        WithdrawSucceeded => "withdraw.succeeded",
        WithdrawFailed => "withdraw.failed",

        SettlementCreated => "settlement.created",
        SettlementCompleted => "settlement.completed",

        OrderCreated => "order.created",
        OrderPaid => "order.paid",
        OrderCanceled => "order.canceled",

        ProductCreated => "product.created",
        ProductUpdated => "product.updated",

        PaymentLinkCreated => "payment_link.created",
        PaymentLinkUpdated => "payment_link.updated",

        MemberCreated => "member.created",
        MemberRemoved => "member.removed",

        MerchantAddressCreated => "merchant_address.created",
        MerchantAddressVerified => "merchant_address.verified",
        MerchantAddressFrozen => "merchant_address.frozen",

        TransactionCreated => "transaction.created",
        TransactionConfirmed => "transaction.confirmed",
    }
}

impl EventType {
    /// The resource part of the type: `invoice` for `invoice.paid`.
    pub fn resource(&self) -> &str {
        let s = self.as_str();
        s.split_once('.').map_or(s, |(resource, _)| resource)
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub object: Option<String>,
    pub api_version: Option<String>,
    pub created: Option<Timestamp>,
    pub data: Option<EventData>,
    pub livemode: Option<bool>,
    /// Deliveries not yet acknowledged by an endpoint.
    pub pending_webhooks: Option<u32>,
    #[serde(rename = "type")]
    pub event_type: Option<EventType>,
    pub request: Option<EventRequest>,
}

api_resource!(Event, "event");

/// The API request that caused an event, if any.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRequest {
    pub id: Option<String>,
    pub idempotency_key: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventData {
    /// The affected resource, as sent. Key order is kept.
    #[serde(default)]
    pub object: JsonObject,
    /// Values of changed fields before the update, on `*.updated` events.
    pub previous_attributes: Option<JsonObject>,
}

impl EventData {
    /// Decodes `object` as a specific resource.
    pub fn decode<T: ApiResource>(&self) -> Result<T> {
        T::from_json(&self.raw_object())
    }

    fn raw_object(&self) -> AnyJson {
        AnyJson::Object(self.object.clone())
    }
}

/// The typed resource inside an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventObject {
    PaymentIntent(Box<PaymentIntent>),
    Charge(Box<Charge>),
    Refund(Box<Refund>),
    Payout(Box<Payout>),
    Invoice(Box<Invoice>),
    Subscription(Box<Subscription>),
    Customer(Box<Customer>),
    Payroll(Box<Payroll>),
    Withdraw(Box<Withdraw>),
    Settlement(Box<Settlement>),
    Order(Box<Order>),
    Product(Box<Product>),
    PaymentLink(Box<PaymentLink>),
    Member(Box<Member>),
    MerchantAddress(Box<MerchantAddress>),
    Transaction(Box<Transaction>),
    /// An event type this SDK does not know, with the raw document.
    Unknown(AnyJson),
}

impl EventObject {
    /// The `object` discriminator of the contained resource.
    pub fn object_name(&self) -> Option<&str> {
        match self {
            EventObject::PaymentIntent(_) => Some(PaymentIntent::OBJECT),
            EventObject::Charge(_) => Some(Charge::OBJECT),
            EventObject::Refund(_) => Some(Refund::OBJECT),
            EventObject::Payout(_) => Some(Payout::OBJECT),
            EventObject::Invoice(_) => Some(Invoice::OBJECT),
            EventObject::Subscription(_) => Some(Subscription::OBJECT),
            EventObject::Customer(_) => Some(Customer::OBJECT),
            EventObject::Payroll(_) => Some(Payroll::OBJECT),
            EventObject::Withdraw(_) => Some(Withdraw::OBJECT),
            EventObject::Settlement(_) => Some(Settlement::OBJECT),
            EventObject::Order(_) => Some(Order::OBJECT),
            EventObject::Product(_) => Some(Product::OBJECT),
            EventObject::PaymentLink(_) => Some(PaymentLink::OBJECT),
            EventObject::Member(_) => Some(Member::OBJECT),
            EventObject::MerchantAddress(_) => Some(MerchantAddress::OBJECT),
            EventObject::Transaction(_) => Some(Transaction::OBJECT),
            EventObject::Unknown(raw) => raw.get("object").and_then(AnyJson::as_str),
        }
    }
}

impl Event {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Self::from_json(&serde_json::from_str(s)?)
    }

    /// Decodes `data.object` into the resource named by the event type.
    ///
    /// Unrecognized event types yield [`EventObject::Unknown`]. A recognized type whose
    /// payload does not decode is an error.
    pub fn decode_object(&self) -> Result<EventObject> {
        let Some(data) = &self.data else {
            return Ok(EventObject::Unknown(AnyJson::Null));
        };
        let resource = self.event_type.as_ref().map_or("", EventType::resource);

        let object = match resource {
            "payment_intent" => EventObject::PaymentIntent(Box::new(data.decode()?)),
            "charge" => EventObject::Charge(Box::new(data.decode()?)),
            "refund" => EventObject::Refund(Box::new(data.decode()?)),
            "payout" => EventObject::Payout(Box::new(data.decode()?)),
            "invoice" => EventObject::Invoice(Box::new(data.decode()?)),
            "subscription" => EventObject::Subscription(Box::new(data.decode()?)),
            "customer" => EventObject::Customer(Box::new(data.decode()?)),
            "payroll" => EventObject::Payroll(Box::new(data.decode()?)),
            "withdraw" => EventObject::Withdraw(Box::new(data.decode()?)),
            "settlement" => EventObject::Settlement(Box::new(data.decode()?)),
            "order" => EventObject::Order(Box::new(data.decode()?)),
            "product" => EventObject::Product(Box::new(data.decode()?)),
            "payment_link" => EventObject::PaymentLink(Box::new(data.decode()?)),
            "member" => EventObject::Member(Box::new(data.decode()?)),
            "merchant_address" => EventObject::MerchantAddress(Box::new(data.decode()?)),
            "transaction" => EventObject::Transaction(Box::new(data.decode()?)),
            _ => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    "No typed decoding for event {} of type {:?}",
                    self.id,
                    self.event_type.as_ref().map(EventType::as_str)
                );
                EventObject::Unknown(data.raw_object())
            }
        };
        Ok(object)
    }
}
