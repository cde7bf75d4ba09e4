//! Common utilities for the Notch paint routine.
//!
//! This crate provides shared infrastructure used by all Notch components:
//! - **Warning System** - colored terminal output for recoverable style problems

pub mod warning;
