//! Core types for Royal Plate.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod money;
pub mod phone;

pub use money::Money;
pub use phone::{Phone, PhoneError};
