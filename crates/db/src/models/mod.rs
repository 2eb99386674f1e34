//! Domain model structs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row. Request payloads and their validation live in
//! `todo_core`.

pub mod work;
