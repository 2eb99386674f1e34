//! Repository layer.
//!
//! [`WorkStore`] is the persistence port the service layer talks to.
//! [`WorkRepo`] implements it over a Postgres pool; [`MemoryWorkStore`]
//! keeps rows in an ordered map for tests and database-less runs.

pub mod memory_work_store;
pub mod work_repo;

pub use memory_work_store::MemoryWorkStore;
pub use work_repo::{WorkRepo, WorkStore};
