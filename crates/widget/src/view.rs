//! The order view: rendering plus edit and submit handlers.
//!
//! View models are rebuilt from the cart on every render; totals are
//! computed fresh and never cached. All handlers run synchronously within a
//! single invocation - no cart mutation can interleave with another.

use askama::Template;
use royal_plate_core::{Cart, CartLine, Money, parse_qty};

use crate::checkout::{self, ContactForm, SubmitOutcome};
use crate::config::WidgetConfig;
use crate::error::{SubmitError, WidgetError};
use crate::host::OrderHost;
use crate::storage::KeyValueStorage;
use crate::store::CartStore;
use crate::webhook::{NullSideChannel, OrderPayload, SideChannel, WebhookClient};

/// Cart line display data for templates.
#[derive(Debug, Clone)]
pub struct CartItemView {
    /// Position in the cart, 0-based.
    pub index: usize,
    /// Dish name.
    pub name: String,
    /// Formatted unit price, e.g. `$12.50`.
    pub price: String,
    /// Quantity.
    pub qty: u32,
    /// Formatted line total, e.g. `$25.00`.
    pub line_total: String,
}

/// Cart display data for templates.
#[derive(Debug, Clone)]
pub struct CartView {
    /// Lines in insertion order.
    pub items: Vec<CartItemView>,
    /// Formatted running total over all lines.
    pub total: String,
    /// Number of lines (badge semantics).
    pub item_count: usize,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: String::new(),
            item_count: 0,
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart
                .lines()
                .iter()
                .enumerate()
                .map(|(index, line)| CartItemView {
                    index,
                    name: line.name.clone(),
                    price: line.price.to_string(),
                    qty: line.qty,
                    line_total: line.line_total().to_string(),
                })
                .collect(),
            total: cart.total().to_string(),
            item_count: cart.len(),
        }
    }
}

/// Cart list template.
#[derive(Template)]
#[template(path = "cart/items.html")]
pub struct CartItemsTemplate {
    /// Cart display data.
    pub cart: CartView,
}

/// Empty-cart placeholder template.
#[derive(Template)]
#[template(path = "cart/empty.html")]
pub struct CartEmptyTemplate;

/// Count badge fragment template.
#[derive(Template)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    /// Number of lines in the cart.
    pub count: usize,
}

/// The ordering widget view, wired to a storage backend and a host page.
pub struct OrderView<S, H> {
    store: CartStore<S>,
    host: H,
    side_channel: Box<dyn SideChannel>,
    config: WidgetConfig,
}

impl<S: KeyValueStorage, H: OrderHost> OrderView<S, H> {
    /// Create a view, building the side channel from the configuration.
    ///
    /// With a webhook URL configured the side channel POSTs each submitted
    /// order; without one it is disabled.
    pub fn new(storage: S, host: H, config: WidgetConfig) -> Self {
        let side_channel: Box<dyn SideChannel> = match &config.webhook_url {
            Some(url) => Box::new(WebhookClient::new(url.clone())),
            None => Box::new(NullSideChannel),
        };
        Self::with_side_channel(storage, host, side_channel, config)
    }

    /// Create a view with an explicit side channel.
    pub fn with_side_channel(
        storage: S,
        host: H,
        side_channel: Box<dyn SideChannel>,
        config: WidgetConfig,
    ) -> Self {
        let store = CartStore::new(storage, config.storage_key.clone());
        Self {
            store,
            host,
            side_channel,
            config,
        }
    }

    /// The cart store backing this view.
    pub const fn store(&self) -> &CartStore<S> {
        &self.store
    }

    /// Persist a snapshot and refresh the count badge.
    ///
    /// Every mutation funnels through here, so the badge can never go stale.
    fn persist(&self, cart: &Cart) {
        self.store.save(cart);
        self.host.set_cart_count(cart.len());
    }

    /// Re-render the cart container from persisted state.
    ///
    /// An empty cart renders the placeholder pointing at the menu instead of
    /// the list and total.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Template`] if rendering fails.
    pub fn render(&self) -> Result<(), WidgetError> {
        let cart = self.store.load();
        let html = if cart.is_empty() {
            CartEmptyTemplate.render()?
        } else {
            CartItemsTemplate {
                cart: CartView::from(&cart),
            }
            .render()?
        };
        self.host.render_cart(&html);
        Ok(())
    }

    /// Refresh the count badge from persisted state.
    pub fn refresh_count(&self) {
        self.host.set_cart_count(self.store.load().len());
    }

    /// Render the standalone count badge fragment.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Template`] if rendering fails.
    pub fn render_count(&self) -> Result<String, WidgetError> {
        Ok(CartCountTemplate {
            count: self.store.load().len(),
        }
        .render()?)
    }

    /// Append a line from catalog markup attributes.
    ///
    /// The price arrives as a string attribute; unparseable or negative
    /// values are normalized to zero. Persists, refreshes the badge, and
    /// shows a confirmation toast.
    pub fn add(&self, name: &str, price_attr: &str) {
        let mut cart = self.store.load();
        cart.push(CartLine::new(name, Money::parse_lossy(price_attr)));
        self.persist(&cart);
        self.host.notify(&format!("{name} added to cart"));
    }

    /// Change the quantity of the line at `index` and fully re-render.
    ///
    /// Non-numeric or non-positive control values normalize to 1.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Template`] if re-rendering fails.
    pub fn set_qty(&self, index: usize, raw: &str) -> Result<(), WidgetError> {
        let mut cart = self.store.load();
        cart.set_qty(index, parse_qty(raw));
        self.persist(&cart);
        self.render()
    }

    /// Remove the line at `index` and fully re-render.
    ///
    /// `index` must be valid for the current cart length; out-of-range is a
    /// caller contract violation.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Template`] if re-rendering fails.
    pub fn remove(&self, index: usize) -> Result<(), WidgetError> {
        let mut cart = self.store.load();
        cart.remove_at(index);
        self.persist(&cart);
        self.render()
    }

    /// Clear the cart after host confirmation.
    ///
    /// Declining the confirmation leaves the cart unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Template`] if re-rendering fails.
    pub fn clear(&self) -> Result<(), WidgetError> {
        if !self.host.confirm("Clear cart?") {
            return Ok(());
        }
        self.clear_and_refresh()
    }

    fn clear_and_refresh(&self) -> Result<(), WidgetError> {
        self.store.clear();
        self.host.set_cart_count(0);
        self.render()
    }

    /// Submit the order.
    ///
    /// Validates the cart and contact fields, formats the order message,
    /// mirrors it to the side channel, opens the messaging deep link, and
    /// only then clears the cart. Precondition failures notify the user and
    /// change nothing.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError`] if the deep link cannot be built or
    /// re-rendering fails. Validation failures are not errors; they come
    /// back as [`SubmitOutcome::Rejected`].
    pub fn submit(&self, form: &ContactForm) -> Result<SubmitOutcome, WidgetError> {
        let cart = self.store.load();
        if cart.is_empty() {
            return Ok(self.reject(SubmitError::EmptyCart));
        }
        let contact = match form.validate() {
            Ok(contact) => contact,
            Err(err) => return Ok(self.reject(err)),
        };

        let message = checkout::format_message(&self.config.restaurant_name, &cart, &contact);

        // Best-effort mirror; never gates the handoff.
        self.side_channel
            .dispatch(OrderPayload::from_order(&cart, &contact));

        let link = checkout::deep_link(&self.config.whatsapp_number, &message)?;
        self.host.set_order_link(&link);
        self.host.open_url(&link);

        // The link is open; only now does the cart go away.
        self.store.clear();
        self.host.set_cart_count(0);
        self.render()?;
        self.host
            .notify("WhatsApp opened — please confirm and send your message.");

        Ok(SubmitOutcome::Sent)
    }

    fn reject(&self, err: SubmitError) -> SubmitOutcome {
        self.host.notify(&err.to_string());
        SubmitOutcome::Rejected(err)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_view_from_cart() {
        let mut cart = Cart::new();
        cart.push(CartLine {
            name: "Pasta".to_string(),
            price: Money::parse_lossy("12.5"),
            qty: 2,
        });
        cart.push(CartLine::new("Soda", Money::parse_lossy("2")));

        let view = CartView::from(&cart);
        assert_eq!(view.item_count, 2);
        assert_eq!(view.total, "$27.00");
        assert_eq!(view.items[0].index, 0);
        assert_eq!(view.items[0].price, "$12.50");
        assert_eq!(view.items[0].line_total, "$25.00");
        assert_eq!(view.items[1].name, "Soda");
    }

    #[test]
    fn test_items_template_renders_lines_and_total() {
        let mut cart = Cart::new();
        cart.push(CartLine::new("Soda", Money::parse_lossy("2")));

        let html = CartItemsTemplate {
            cart: CartView::from(&cart),
        }
        .render()
        .unwrap();

        assert!(html.contains("Soda"));
        assert!(html.contains("$2.00"));
        assert!(html.contains("min=\"1\""));
        assert!(html.contains("Total: $2.00"));
    }

    #[test]
    fn test_empty_template_points_at_menu() {
        let html = CartEmptyTemplate.render().unwrap();
        assert!(html.contains("Your cart is empty"));
        assert!(html.contains("menu"));
    }

    #[test]
    fn test_count_template() {
        let html = CartCountTemplate { count: 3 }.render().unwrap();
        assert!(html.contains('3'));
    }
}
