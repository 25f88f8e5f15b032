//! Shared test utilities

pub mod lookup;
