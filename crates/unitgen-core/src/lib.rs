//! unitgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for unitgen, a
//! tool that renders a systemd service unit and moves it into place.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           unitgen-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (UnitService: stage, relocate, install)│
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │          (Driven: Filesystem)           │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    unitgen-adapters (Infrastructure)    │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ServiceSpec, ServiceParams, UnitFile)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use unitgen_core::prelude::*;
//!
//! // 1. Resolve a parameter bag
//! let plan = ServiceParams {
//!     name: Some("myapp".into()),
//!     description: Some("My App".into()),
//!     exec_start: Some("/usr/bin/myapp".into()),
//!     restart: Some("always".into()),
//!     tmp: Some("/tmp".into()),
//!     location: Some("/etc/systemd/system".into()),
//! }
//! .resolve(FieldPolicy::Strict)
//! .unwrap();
//!
//! // 2. Use application service (with an injected adapter)
//! let service = UnitService::new(filesystem);
//! let installed = service.install(&plan).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        UnitService,
        ports::{Filesystem, UNIT_FILE_MODE},
    };
    pub use crate::domain::{FieldPolicy, InstallPlan, ServiceParams, ServiceSpec, UnitFile};
    pub use crate::error::{UnitgenError, UnitgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
