#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

pub mod error;
pub use error::*;
pub mod client;
pub use client::*;
pub mod recs;
pub use recs::*;
