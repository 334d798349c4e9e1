//! Use-case services: validation, defaulting and the soft-failure boundary.
//!
//! # Responsibility
//! - Apply business preconditions before any repository call.
//! - Collapse repository failures into the negative outcomes the API layer
//!   consumes: `None`, `false` or an empty list, never a panic or an error
//!   type.
//!
//! # Invariants
//! - A declined validation performs zero storage work.
//! - Update operations require a storage-assigned positive id.

pub mod account_service;
pub mod contact_service;
pub mod post_service;
pub mod task_service;

/// Shared precondition: required text fields must carry non-whitespace
/// content.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
