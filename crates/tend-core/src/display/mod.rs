//! Display formatting functions and result types.
//!
//! This module provides Display implementations for the domain models,
//! newtype wrappers for collections, and wrapper types for operation
//! results, enabling consistent markdown-formatted output across
//! different output contexts.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (Plants, DueEntries, ...)
//! - [`results`]: Operation result types (CreateResult, DeleteResult, WaterResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! All formatters produce markdown for rich terminal display; business
//! logic stays in the models, presentation lives here.

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::{Achievements, DueEntries, Groups, Plants, Quests};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, WaterResult};
pub use status::OperationStatus;
