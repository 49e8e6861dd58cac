//! Vercel REST API access
//!
//! Authenticated JSON requests against the Vercel API with failures mapped
//! to a typed [`FetchError`].

pub mod error;

mod client;
mod fetch;

pub use client::*;
pub use error::FetchError;
pub use fetch::*;
