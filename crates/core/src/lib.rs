//! Green And Blue Core - Shared domain types and logic.
//!
//! This crate provides the domain model used across all Green And Blue
//! components:
//! - `storefront` - Public shop (browse, filter, cart, WhatsApp quote)
//! - `admin` - Password-gated catalog management panel
//! - `cli` - Command-line tools for seeding and export
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP
//! clients, no async runtime. Access to the remote product collection
//! lives in the `green-blue-store` crate.
//!
//! # Modules
//!
//! - [`types`] - Product model and category enumeration
//! - [`catalog`] - Snapshot cache with subscribe/notify
//! - [`filter`] - Category + name-substring shop filter
//! - [`cart`] - Session cart state machine
//! - [`checkout`] - WhatsApp quote message and deep link
//! - [`gate`] - Admin panel lock state

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod filter;
pub mod gate;
pub mod types;

pub use types::*;
