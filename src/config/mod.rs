//! Configuration module for ledger-statement
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Category taxonomy selection

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::Settings;
