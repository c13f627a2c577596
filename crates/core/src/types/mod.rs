//! Core types for StyleHub.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod money;
pub mod quantity;

pub use email::{Email, EmailError};
pub use quantity::Quantity;
