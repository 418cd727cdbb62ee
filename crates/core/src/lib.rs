//! Luvyn Core - Shared types library.
//!
//! This crate provides common types used across the Luvyn demo shop:
//! - `storefront` - The public-facing shop
//! - `integration-tests` - End-to-end tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no session access,
//! no HTTP. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
