//! StyleHub Storefront interactivity library.
//!
//! Everything the storefront pages wire up after the markup is parsed:
//!
//! - A scripted FAQ chat widget (panel state, transcript, canned replies,
//!   simulated typing delay)
//! - Declarative page actions (navigate, logout, subscribe, quick-view,
//!   add-to-cart) parsed into typed commands and dispatched centrally
//! - The persisted cart: repository over a key-value store, order summary
//!   arithmetic, and rendered cart/badge fragments
//!
//! There is no network interface; all state lives in the host page and the
//! local key-value store.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod actions;
pub mod chat;
pub mod config;
pub mod filters;
pub mod models;
pub mod newsletter;
pub mod repository;
pub mod storage;
pub mod views;
