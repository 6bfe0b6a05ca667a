//! Structured logging facility for the tuttle data core
//!
//! This module provides a canonical logging facility with:
//! - Single initialization point via `init(profile)`
//! - Human-readable output for development, JSON for production
//! - A quiet registry profile for tests
//!
//! The embedding application (the GUI shell) calls `init` once at startup;
//! the store and intent layers emit `tracing` events against whatever
//! subscriber is installed.
//!
//! # Usage
//!
//! ```rust
//! use tuttle_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod init;

pub use init::{init, Profile};
