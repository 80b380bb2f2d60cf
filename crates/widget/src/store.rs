//! The cart store: sole owner of the persisted cart.
//!
//! All reads and writes of the storage key go through here; no other module
//! touches the underlying storage.

use royal_plate_core::Cart;

use crate::storage::KeyValueStorage;

/// Persistence wrapper around the cart.
#[derive(Debug)]
pub struct CartStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> CartStore<S> {
    /// Create a store persisting under `key`.
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Load the persisted cart.
    ///
    /// Missing or malformed data yields an empty cart. Parse errors are
    /// logged and swallowed, never surfaced to the user. Loaded carts are
    /// normalized so `price >= 0` and `qty >= 1` hold.
    pub fn load(&self) -> Cart {
        let Some(raw) = self.storage.get_item(&self.key) else {
            return Cart::new();
        };
        match serde_json::from_str::<Cart>(&raw) {
            Ok(mut cart) => {
                cart.normalize();
                cart
            }
            Err(e) => {
                tracing::warn!("Discarding malformed persisted cart: {e}");
                Cart::new()
            }
        }
    }

    /// Overwrite the persisted state with a full cart snapshot.
    ///
    /// Write failures are logged and not otherwise handled; storage capacity
    /// is assumed sufficient.
    pub fn save(&self, cart: &Cart) {
        match serde_json::to_string(cart) {
            Ok(raw) => {
                if let Err(e) = self.storage.set_item(&self.key, &raw) {
                    tracing::error!("Failed to persist cart: {e}");
                }
            }
            Err(e) => tracing::error!("Failed to serialize cart: {e}"),
        }
    }

    /// Remove all persisted cart state.
    pub fn clear(&self) {
        self.storage.remove_item(&self.key);
    }
}
