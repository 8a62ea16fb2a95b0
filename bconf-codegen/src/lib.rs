//! Shared code generation for the bconf build-config generator.
//!
//! This crate holds everything the Java and Kotlin generators have in
//! common.
//!
//! # Module Organization
//!
//! - [`builder`] - Indented source text building ([`builder::CodeBuilder`])
//! - [`language`] - Generator, type-mapping, literal and naming abstractions
//! - [`host`] - Toolchain detection and the build plan
//! - [`pipeline`] - The configure → resolve → validate lifecycle
//! - [`generation`] - Starter manifest and stale-file cleanup

pub mod builder;
mod error;
pub mod generation;
pub mod host;
pub mod language;
pub mod pipeline;

pub use error::GenerateError;
