//! Integration tests for the collections layer
//!
//! Tests list partitioning and null-preserving conversions.

mod split;
