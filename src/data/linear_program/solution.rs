//! # Representation of solutions
//!
//! Once a linear program is solved, the optimal variable assignment is reported with this type.
//! It names variables as in the original problem; slack variables introduced during standard form
//! derivation never appear here.
use serde::Serialize;

/// Values of the original decision variables at the reported optimum.
///
/// Every declared variable is present, even when its optimal value is zero.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct Solution {
    /// Value of the objective function for this solution, in the original optimization sense.
    pub objective_value: f64,
    /// (variable name, solution value) tuples for all variables, in declaration order.
    pub variable_values: Vec<(String, f64)>,
}

impl Solution {
    /// A plain constructor.
    pub fn new(objective_value: f64, variable_values: Vec<(String, f64)>) -> Self {
        Self { objective_value, variable_values }
    }

    /// Value of a variable by name, if it exists in this solution.
    pub fn value_of(&self, name: &str) -> Option<f64> {
        self.variable_values
            .iter()
            .find(|(variable, _)| variable == name)
            .map(|&(_, value)| value)
    }

    /// Whether two solutions agree on objective value and all variable values, up to `tolerance`.
    ///
    /// Comparison is by name; the order in which the variables are stored is irrelevant.
    pub fn is_close_to(&self, other: &Self, tolerance: f64) -> bool {
        if (self.objective_value - other.objective_value).abs() > tolerance {
            return false;
        }

        if self.variable_values.len() != other.variable_values.len() {
            return false;
        }

        self.variable_values.iter().all(|(name, value)| {
            other.value_of(name).map_or(false, |other_value| (value - other_value).abs() <= tolerance)
        })
    }
}
