//! Core types for Prosper.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod neurotype;

pub use email::{Email, EmailError};
pub use id::*;
pub use neurotype::{Neurotype, NeurotypeError};
