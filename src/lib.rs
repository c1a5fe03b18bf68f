//! Commons - collection conversions and properties file access
//!
//! This crate re-exports both layers for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! commons_io          Properties text format, resource lookup, load/save
//! commons_collections List partitioning and null-preserving conversions
//! ```
//!
//! The two layers are independent; neither depends on the other.

pub use commons_collections as collections;
pub use commons_io as io;
