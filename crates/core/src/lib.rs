//! Shop Pulse Core - Shared types library.
//!
//! This crate provides common types used across all Shop Pulse components:
//! - `analytics` - Synthetic data generators, derivations and table logic
//! - `cli` - Command-line reports over a generated dataset
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O and no randomness. This keeps it
//! lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money, emails, and the
//!   status/segment enums shared by every dashboard view

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
