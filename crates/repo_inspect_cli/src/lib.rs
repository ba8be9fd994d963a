//! repo-inspect CLI library exports for integration testing.
//!
//! This module exposes the command implementation and its supporting
//! configuration, credential, logging and repository resolution code.

pub mod commands;
pub mod config;
pub mod credentials;
pub mod current_repository;
pub mod errors;
pub mod logging;
