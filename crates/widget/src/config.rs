//! Widget configuration.
//!
//! Deployments configure the widget programmatically; there are no
//! environment variables and no config files. The defaults mirror the
//! constants the original deployment shipped with.

use url::Url;

/// Default storage key for the persisted cart.
pub const DEFAULT_STORAGE_KEY: &str = "royalplate_cart";

/// Default WhatsApp recipient, digits only, no leading `+`.
pub const DEFAULT_WHATSAPP_NUMBER: &str = "15551234567";

/// Default restaurant name used in the order greeting.
pub const DEFAULT_RESTAURANT_NAME: &str = "The Royal Plate";

/// Ordering widget configuration.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// Restaurant name used in the greeting line of the order message.
    pub restaurant_name: String,
    /// WhatsApp recipient identifier (digits only, no leading `+`).
    pub whatsapp_number: String,
    /// Logging webhook endpoint. `None` disables the side channel.
    pub webhook_url: Option<Url>,
    /// Key the cart is persisted under.
    pub storage_key: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            restaurant_name: DEFAULT_RESTAURANT_NAME.to_string(),
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            webhook_url: None,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl WidgetConfig {
    /// Create a configuration for the given WhatsApp recipient.
    #[must_use]
    pub fn new(whatsapp_number: impl Into<String>) -> Self {
        Self {
            whatsapp_number: whatsapp_number.into(),
            ..Self::default()
        }
    }

    /// Enable the order-mirroring webhook.
    #[must_use]
    pub fn with_webhook(mut self, url: Url) -> Self {
        self.webhook_url = Some(url);
        self
    }

    /// Override the restaurant name used in the greeting.
    #[must_use]
    pub fn with_restaurant_name(mut self, name: impl Into<String>) -> Self {
        self.restaurant_name = name.into();
        self
    }

    /// Override the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}
