//! Core types for HypTest
//!
//! This crate hosts the error type shared by the numeric core and the
//! CLI so that every other crate agrees on one `Result`.

pub mod error;

pub use error::{Error, Result};
