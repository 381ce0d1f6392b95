//! `coffee-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no I/O, no terminal, no logging setup).

pub mod aggregate;
pub mod error;
pub mod value_object;

pub use aggregate::Aggregate;
pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;
