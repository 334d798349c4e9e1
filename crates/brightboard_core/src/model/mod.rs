//! Domain records persisted by the repository layer.
//!
//! # Responsibility
//! - Define the four row-shaped entities served by the REST surface.
//!
//! # Invariants
//! - Every record's `id` is assigned exclusively by storage on insert.
//! - Creation/update timestamps are stamped by the repository, never by
//!   callers.

pub mod account;
pub mod contact;
pub mod post;
pub mod task;
