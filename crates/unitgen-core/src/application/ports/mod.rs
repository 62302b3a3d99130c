//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `unitgen-adapters` implement these.
//!
//! - **Driven (Output) Ports**: called by the application, implemented by infrastructure
//!   - `Filesystem`: staging writes and relocation

pub mod output;

pub use output::{Filesystem, UNIT_FILE_MODE};

#[cfg(test)]
pub use output::MockFilesystem;
