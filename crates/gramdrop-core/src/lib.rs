//! # Gramdrop Core
//!
//! The domain layer of Gramdrop.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! link validation, caption analysis, and the ingestion pipeline that ties
//! them to the metadata and storage ports.

pub mod analysis;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod validation;

pub use error::DomainError;
