//! # Algorithms
//!
//! The simplex engine with its standard form derivation and tableau arithmetic, the sensitivity
//! projection over a finished run, and the independent graphical solver for the two-variable
//! case.
pub mod graphical;
pub mod sensitivity;
pub mod simplex;
