use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use url::Url;

use martianpay_core::{
    api_enum,
    types::{Metadata, Timestamp},
};

use crate::{
    concepts::{api_resource, generated_id},
    models::event::EventType,
};

/// HTTP header carrying the signature of a webhook delivery.
pub const SIGNATURE_HEADER: &str = "Martian-Pay-Signature";

api_enum! {
    pub enum WebhookEndpointStatus {
        Enabled => "enabled",
        Disabled => "disabled",
    }
}

/// A URL that receives event deliveries. IDs look like `we_` followed by 24 characters.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookEndpoint {
    pub id: String,
    pub object: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    /// Event types delivered to this endpoint. `*` subscribes to everything.
    pub enabled_events: Option<Vec<EventType>>,
    pub status: Option<WebhookEndpointStatus>,
    /// Signing secret. Only returned when the endpoint is created.
    pub secret: Option<String>,
    pub api_version: Option<String>,
    pub metadata: Option<Metadata>,
    pub created: Option<Timestamp>,
    pub updated: Option<Timestamp>,
    pub livemode: Option<bool>,
}

api_resource!(WebhookEndpoint, "webhook_endpoint");
generated_id!(WebhookEndpoint, "we_", 24);

impl WebhookEndpoint {
    /// Whether deliveries of `event_type` go to this endpoint.
    pub fn receives(&self, event_type: &EventType) -> bool {
        if matches!(self.status, Some(WebhookEndpointStatus::Disabled)) {
            return false;
        }
        self.enabled_events
            .iter()
            .flatten()
            .any(|enabled| enabled.as_str() == "*" || enabled == event_type)
    }
}

/// Body for creating or updating a [`WebhookEndpoint`].
#[skip_serializing_none]
#[derive(Builder, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookEndpointParams {
    pub url: Url,
    pub enabled_events: Vec<EventType>,
    #[builder(into)]
    pub description: Option<String>,
    #[builder(into)]
    pub api_version: Option<String>,
    pub disabled: Option<bool>,
    pub metadata: Option<Metadata>,
}
