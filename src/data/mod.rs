//! # Data structures
//!
//! Descriptions of linear programs as provided by the caller, and the solution values eventually
//! reported back. Algorithm-internal state lives in the `algorithm` module instead.
pub mod linear_program;
