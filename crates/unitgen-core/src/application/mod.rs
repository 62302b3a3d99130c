//! Application layer for unitgen.
//!
//! This layer contains:
//! - **Services**: use case orchestration (`UnitService`)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but holds no
//! rendering rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::UnitService;

pub use ports::{Filesystem, UNIT_FILE_MODE};

pub use error::ApplicationError;
