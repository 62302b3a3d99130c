//! Core domain layer for unitgen.
//!
//! This module contains pure logic with no I/O. Writing and moving files
//! is done through the ports defined in the application layer.
//!
//! - **No async**: domain logic is synchronous
//! - **No I/O**: rendering returns text, it never touches the filesystem
//! - **Immutable values**: all domain objects are Clone + PartialEq

pub mod error;
pub mod service_spec;
pub mod unit_file;

pub use error::{DomainError, ErrorCategory};
pub use service_spec::{FieldPolicy, InstallPlan, ServiceParams, ServiceSpec};
pub use unit_file::{UnitFile, WANTED_BY};
