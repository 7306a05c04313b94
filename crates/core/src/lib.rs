//! Core business logic for the Andina dashboard.
//!
//! This crate contains pure business logic with ZERO web or file dependencies.
//! All domain types, filtering rules, and aggregations live here.
//!
//! # Modules
//!
//! - `tables` - The six dataset tables and their records
//! - `filter` - Filter selections and the row-filtering pipeline
//! - `aggregate` - Reducers, group-by accumulation, and rankings
//! - `views` - KPI and chart assembly for the three dashboard views
//! - `dashboard` - Filtered snapshot combining selection and views

pub mod aggregate;
pub mod dashboard;
pub mod filter;
pub mod tables;
pub mod views;
