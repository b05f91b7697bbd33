//! Magneto daemon library
//!
//! This module provides the service boundary around the mutant detector:
//! - REST API handlers for classification and statistics
//! - Configuration loading
//! - Counter storage selection
//! - Server lifecycle management

pub mod api;
pub mod config;
pub mod error;
pub mod server;

pub use config::DaemonConfig;
pub use error::{ApiError, DaemonError};
pub use server::Server;
