//! gituml library
//!
//! This module exports the CLI configuration and the conversion pipeline
//! for use in integration tests and as a library.

pub mod config;
pub mod runner;
