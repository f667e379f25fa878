//! Shared types, formatting, and configuration for SimuCredito.
//!
//! This crate provides common types used across all other crates:
//! - Money formatting with decimal precision and regional grouping
//! - Typed IDs for simulations
//! - Pagination types for list endpoints
//! - Configuration management

pub mod config;
pub mod types;

pub use config::AppConfig;
