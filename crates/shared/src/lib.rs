//! Shared types, errors, and configuration for Teller.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe account references
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, BankConfig, LogConfig, PolicyConfig};
pub use error::{AppError, AppResult};
pub use types::AccountId;
