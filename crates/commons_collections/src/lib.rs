//! Collection conversion helpers for Commons.
//!
//! This crate provides:
//! - [`split_list`] - Partition a list into contiguous, separately owned chunks
//! - [`to_set`], [`to_list`] - Copy any collection into a set or a list
//! - [`map_values_to_collection`], [`map_values_to_list`], [`map_values_to_set`] -
//!   Views and copies over the values of a map
//! - [`array_to_set`], [`array_to_list`] - Copy a slice into a set or a list
//!
//! Every conversion is null-preserving: an absent input (`None`) produces an
//! absent output, never an empty container.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod convert;
pub mod split;

pub use convert::{
    array_to_list, array_to_set, map_values_to_collection, map_values_to_list, map_values_to_set,
    to_list, to_set,
};
pub use split::{split_chunk_size, split_list, split_slice};
