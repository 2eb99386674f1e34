//! Service layer between HTTP handlers and the persistence port.

pub mod work_service;

pub use work_service::WorkService;
