//! Core library for psbdmp
//!
//! This crate implements the **Functional Core** of the psbdmp tool: pure
//! functions and types with zero I/O. The `psbdmp` binary crate (the
//! Imperative Shell) owns the HTTP client and the CLI, and delegates to this
//! crate for everything that can be expressed as a plain transformation:
//!
//! - [`dump`]: the JSON envelope types the psbdmp.ws API responds with
//! - [`paths`]: endpoint path construction with percent-encoded user input
//! - [`dates`]: the service's `DD.MM.YYYY` wire date format and since-days
//!   range normalization
//!
//! Everything here is deterministic and tested with fixture data, no mocking
//! required.

pub mod dates;
pub mod dump;
pub mod paths;
