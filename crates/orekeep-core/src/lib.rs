//! orekeep core - registries, scheduling, and payroll for survey sites
//!
//! Three in-memory registries (locations, minerals, workers) with
//! cross-entity referential and uniqueness invariants, a one-shift-per-weekday
//! scheduler on top of the worker registry, and payroll figures derived from
//! weekly schedules. Everything is synchronous and in-memory; seed-file
//! loaders fill the registries at startup.

pub mod config;
pub mod error;
pub mod ids;
pub mod models;
pub mod payroll;
pub mod registry;
pub mod seed;

pub use error::{ErrorClass, OrekeepError, Result};
pub use registry::Registries;
