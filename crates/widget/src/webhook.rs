//! Best-effort order mirroring to a logging webhook.
//!
//! The side channel is a detached task with no result channel: dispatch
//! returns immediately, and completion or failure is never awaited, never
//! ordered relative to the messaging handoff, and never retried.

use royal_plate_core::Cart;
use serde::Serialize;
use url::Url;

use crate::checkout::Contact;

/// Structured copy of a submitted order, as POSTed to the webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderPayload {
    /// Comma-joined dish names.
    pub dish: String,
    /// Summed quantity across all lines.
    pub qty: u64,
    /// Comma-joined per-line unit prices, unformatted.
    pub price: String,
    /// Two-decimal order total, no currency symbol.
    pub total: String,
    /// Customer name ("Guest" when left blank).
    #[serde(rename = "customerName")]
    pub customer_name: String,
    /// Customer phone number.
    #[serde(rename = "customerPhone")]
    pub customer_phone: String,
    /// Free-text notes, possibly empty.
    pub notes: String,
}

impl OrderPayload {
    /// Build the payload for a validated order.
    #[must_use]
    pub fn from_order(cart: &Cart, contact: &Contact) -> Self {
        Self {
            dish: cart
                .lines()
                .iter()
                .map(|line| line.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            qty: cart.total_quantity(),
            price: cart
                .lines()
                .iter()
                .map(|line| line.price.raw())
                .collect::<Vec<_>>()
                .join(","),
            total: cart.total().fixed(),
            customer_name: contact.name.clone(),
            customer_phone: contact.phone.to_string(),
            notes: contact.notes.clone(),
        }
    }
}

/// Fire-and-forget order sink.
pub trait SideChannel: Send + Sync {
    /// Hand off a payload.
    ///
    /// Must not block the caller. Failures are the implementation's to
    /// swallow; there is no result channel.
    fn dispatch(&self, payload: OrderPayload);
}

/// Disabled side channel, used when no webhook endpoint is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSideChannel;

impl SideChannel for NullSideChannel {
    fn dispatch(&self, _payload: OrderPayload) {}
}

/// Webhook client that POSTs payloads as JSON.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl WebhookClient {
    /// Create a client for `endpoint`.
    #[must_use]
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

impl SideChannel for WebhookClient {
    /// Spawns the POST on the ambient Tokio runtime.
    ///
    /// Must be called from within a runtime. The response is not validated;
    /// network and endpoint errors are logged at debug and discarded.
    fn dispatch(&self, payload: OrderPayload) {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        tokio::spawn(async move {
            match client.post(endpoint).json(&payload).send().await {
                Ok(response) => {
                    tracing::debug!(status = %response.status(), "Order mirrored to webhook");
                }
                Err(e) => tracing::debug!("Webhook submission failed (ignored): {e}"),
            }
        });
    }
}
