//! # Linear program representations
pub mod elements;
pub mod solution;
