//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Separate
//! structs exist for creation (`NewLink`) and mutation (`LinkUpdate`) so
//! immutable fields never appear in a write payload.

pub mod link;

pub use link::{Link, LinkUpdate, NewLink};
