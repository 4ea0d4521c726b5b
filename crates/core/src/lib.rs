//! Prosper Core - Shared domain types.
//!
//! Types used by every Prosper component:
//! - `api` - RPC server for clients, clinicians and appointments
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no HTTP. Database encoding is opt-in through the `postgres` feature.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs, validated emails, and the neurotype enum

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
