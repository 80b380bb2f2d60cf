//! Royal Plate Core - Shared types library.
//!
//! This crate provides common types used across all Royal Plate components:
//! - `widget` - The ordering widget (cart store, order view, checkout)
//! - `integration-tests` - End-to-end flow tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for money amounts and phone numbers
//! - [`cart`] - The cart model: ordered lines of dish, price, and quantity

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::{Cart, CartLine, parse_qty};
pub use types::*;
