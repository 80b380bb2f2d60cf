//! Royal Plate ordering widget.
//!
//! A client-side shopping cart for a restaurant ordering page: dishes picked
//! from the catalog accumulate in a host-provided key-value store, the order
//! page renders them as an editable summary, and submitting hands the order
//! off as a pre-formatted WhatsApp message, optionally mirroring it to a
//! logging webhook.
//!
//! # Architecture
//!
//! - [`store::CartStore`] owns the persisted cart; nothing else touches the
//!   storage key.
//! - [`view::OrderView`] renders the cart through Askama templates and exposes
//!   the edit/submit handlers. It talks to the page only through the
//!   [`host::OrderHost`] capability trait, never through markup identifiers.
//! - [`webhook`] models the order mirror as a detached fire-and-forget task
//!   with no result channel; it never gates the primary flow.
//!
//! All cart mutations run synchronously within a single handler invocation.
//! The webhook dispatch is the only asynchronous operation.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod checkout;
pub mod config;
pub mod error;
pub mod host;
pub mod storage;
pub mod store;
pub mod view;
pub mod webhook;

pub use checkout::{Contact, ContactForm, SubmitOutcome};
pub use config::WidgetConfig;
pub use error::{SubmitError, WidgetError};
pub use host::OrderHost;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};
pub use store::CartStore;
pub use view::{CartItemView, CartView, OrderView};
pub use webhook::{NullSideChannel, OrderPayload, SideChannel, WebhookClient};
