// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod listing;
pub mod query;
pub mod raw;

pub use listing::*;
pub use query::*;
pub use raw::*;
