//! Bundle orchestration and coordination.
//!
//! This module provides the main [`Bundler`] orchestrator that turns two
//! library versions into a `Resources.zip` holding the curl and OpenSSL
//! DLLs (plus the CA bundle) for every Windows architecture.
//!
//! # Module Organization
//!
//! - [`checksum`] - SHA256 checksum of the produced archive
//! - [`download`] - Download, unpack and cleanup of one remote package
//! - [`orchestrator`] - Main [`Bundler`] struct and packaging sequence
//! - [`tool_detection`] - 7-Zip discovery

pub mod checksum;
pub mod download;
mod orchestrator;
pub mod tool_detection;

pub use orchestrator::Bundler;
pub use tool_detection::locate_archiver;
