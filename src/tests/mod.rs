//! # Integration tests that require a look inside the crate.
//!
//! Each problem module walks one fixed program through every representation: the general form,
//! the standard form, the initial tableau, the pivot sequence, the extracted solution and the
//! sensitivity projection, asserting the intermediate state at each stage.
pub mod problem_2;
