//! Command modules for the repo-inspect CLI.
//!
//! - `inspect_cmd`: collects and renders the governance report of one repository

pub mod inspect_cmd;
