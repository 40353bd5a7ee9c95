//! Clubdesk Core - Shared types library.
//!
//! This crate provides common types used across all Clubdesk components:
//! - `portal` - The page engine (storage, form binding, rendering, controllers)
//! - `cli` - The command-line host that drives the portal pages
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! rendering. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers and enums for ids, amounts, statuses, and
//!   todo priorities

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
