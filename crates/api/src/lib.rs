//! Prosper API library.
//!
//! Client signup, clinician directory and appointment booking exposed as
//! RPC procedures over HTTP. The crate is a library so the router can be
//! driven in tests against [`store::MemoryStore`] and reused by the CLI.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod seed;
pub mod server;
pub mod services;
pub mod state;
pub mod store;
pub mod validation;
