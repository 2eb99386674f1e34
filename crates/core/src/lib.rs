//! Domain types for the work tracker.
//!
//! Pure logic only: the work status enum, request payload validation, and
//! paging/sorting requests. Nothing in this crate touches the database or
//! the HTTP layer.

pub mod error;
pub mod paging;
pub mod types;
pub mod work;
