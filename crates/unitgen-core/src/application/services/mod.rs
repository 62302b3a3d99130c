//! Application services - orchestrate use cases.

pub mod unit_service;

pub use unit_service::UnitService;
