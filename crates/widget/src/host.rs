//! Host page capabilities.
//!
//! The widget does not know about markup. The hosting page provides this
//! capability set, and everything the widget shows the user goes through it.

use std::sync::Arc;

use url::Url;

/// What the hosting page can do for the widget.
pub trait OrderHost: Send + Sync {
    /// Replace the contents of the cart render container.
    fn render_cart(&self, html: &str);

    /// Update the visible item-count badge.
    ///
    /// The badge shows the number of lines, not the quantity sum.
    fn set_cart_count(&self, count: usize);

    /// Show a transient notification.
    fn notify(&self, message: &str);

    /// Ask the user to confirm a destructive action.
    fn confirm(&self, prompt: &str) -> bool;

    /// Open a URL in a new browsing context.
    fn open_url(&self, url: &Url);

    /// Point the optional visible order link at `url`.
    ///
    /// Hosts without such an element keep the default no-op.
    fn set_order_link(&self, url: &Url) {
        let _ = url;
    }
}

impl<T: OrderHost + ?Sized> OrderHost for Arc<T> {
    fn render_cart(&self, html: &str) {
        (**self).render_cart(html);
    }

    fn set_cart_count(&self, count: usize) {
        (**self).set_cart_count(count);
    }

    fn notify(&self, message: &str) {
        (**self).notify(message);
    }

    fn confirm(&self, prompt: &str) -> bool {
        (**self).confirm(prompt)
    }

    fn open_url(&self, url: &Url) {
        (**self).open_url(url);
    }

    fn set_order_link(&self, url: &Url) {
        (**self).set_order_link(url);
    }
}
