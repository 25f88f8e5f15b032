//! Store lookup layer
//!
//! - [`platform`]: Android/iOS selection of identifiers and response fields
//! - [`lookup`]: `StoreLookup` trait and the lookup service response shape
//! - [`client`]: reqwest-backed `StoreLookup` implementation

pub mod client;
pub mod lookup;
pub mod platform;

pub use client::LookupServiceClient;
pub use lookup::{LookupMeta, LookupResponse, StoreLookup};
pub use platform::{Platform, PlatformIdentity};
