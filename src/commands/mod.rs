//! Command implementations for shotsync CLI

pub mod completions;
pub mod config;
pub mod helpers;
pub mod manifest;
pub mod organize;
pub mod resolve;
pub mod run;
pub mod version;
