//! Command handlers for the `photodex` binary.

pub mod config;
pub mod interactive;
pub mod scan;
