//! # A step-by-step linear program solver
//!
//! Linear programs are solved with the tableau variant of the Simplex Method. Unlike solvers that
//! only report the optimum, every intermediate tableau and pivot decision is retained so that the
//! run can be played back afterwards, one iteration at a time. Post-optimal sensitivity
//! information (shadow prices, reduced costs) is derived from the retained tableaus, and problems
//! in exactly two variables can additionally be solved geometrically as an independent
//! cross-check.
//!
//! The engine assumes an origin-feasible problem: all constraints of "less than or equal" type
//! with non-negative right-hand sides. Inputs outside that shape are rejected during validation,
//! there is no phase-1 procedure.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;

#[cfg(test)]
mod tests;
