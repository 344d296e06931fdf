//! # The Simplex Method, tableau style
//!
//! The dense tableau variant of the algorithm: easy to inspect, sized for teaching rather than
//! for large sparse problems. The driver in `logic` records every decision it takes, so a run can
//! be replayed tableau by tableau.
pub mod logic;
pub mod standard_form;
pub mod step;
pub mod tableau;
