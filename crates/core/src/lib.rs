//! StyleHub Core - Shared types library.
//!
//! This crate provides common types used across all StyleHub components:
//! - `storefront` - Client-side storefront interactivity (cart, chat, actions)
//! - `integration-tests` - Cross-crate flow tests
//!
//! # Architecture
//!
//! The core crate contains only types and pure helpers - no I/O, no storage
//! access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Validated emails, quantities, and money helpers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
