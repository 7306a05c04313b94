//! Shared types, errors, and configuration for the Andina dashboard backend.
//!
//! This crate provides common types used across all other crates:
//! - Inclusive date ranges for filter selections
//! - Typed IDs for type-safe entity references
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, DataConfig};
pub use error::{AppError, AppResult};
