//! # Conversion to standard form
//!
//! The engine internally always maximizes over equality constraints. A general description is
//! brought into that shape by negating the objective of minimization problems and by adding one
//! slack variable per "<=" constraint.
use crate::data::linear_program::elements::{ConstraintType, LinearProgram, Objective, ValidationError};

/// A linear program in the shape the simplex engine works on.
///
/// Maximization only, all constraints equalities through slack variables, right-hand sides
/// non-negative. Derivation is purely functional; the original program is not modified.
#[derive(Clone, Debug, PartialEq)]
pub struct StandardForm {
    /// Optimization sense of the original program, needed to report the objective value in the
    /// caller's convention.
    pub objective: Objective,
    /// Extended objective coefficients: the (possibly negated) original cost followed by one zero
    /// per slack variable.
    pub cost: Vec<f64>,
    /// Dense constraint rows of width `nr_variables()`: the original coefficients followed by an
    /// identity block for the slacks.
    pub constraints: Vec<Vec<f64>>,
    /// Right-hand sides, unchanged from the original program.
    pub rhs: Vec<f64>,
    /// All variable names: the original names followed by the slack names `s1..sm`.
    pub variable_names: Vec<String>,
    /// How many of `variable_names` are original decision variables. Needed to extract the
    /// solution later.
    pub nr_original_variables: usize,
}

impl StandardForm {
    /// Derive the standard form of a program.
    ///
    /// Validates the program's shape first, and then checks the engine's input restriction: every
    /// constraint must be of "<=" type with a non-negative right-hand side, such that the all-slack
    /// basis at the origin is feasible and no phase-1 procedure is needed.
    pub fn derive(program: &LinearProgram) -> Result<Self, ValidationError> {
        program.validate()?;

        for (i, constraint) in program.constraints.iter().enumerate() {
            if constraint.direction != ConstraintType::Less {
                return Err(ValidationError::UnsupportedConstraintType {
                    constraint: i,
                    found: constraint.direction,
                });
            }
            if constraint.rhs < 0.0 {
                return Err(ValidationError::NegativeRhs { constraint: i });
            }
        }

        let nr_original = program.nr_variables();
        let nr_constraints = program.nr_constraints();

        let mut cost: Vec<f64> = match program.objective {
            Objective::Maximize => program.cost.clone(),
            Objective::Minimize => program.cost.iter().map(|&c| -c).collect(),
        };
        cost.extend(std::iter::repeat(0.0).take(nr_constraints));

        let constraints = program
            .constraints
            .iter()
            .enumerate()
            .map(|(i, constraint)| {
                let mut row = constraint.coefficients.clone();
                row.extend((0..nr_constraints).map(|j| if j == i { 1.0 } else { 0.0 }));
                row
            })
            .collect();

        let mut variable_names = program.variable_names.clone();
        variable_names.extend((1..=nr_constraints).map(|i| format!("s{}", i)));

        Ok(Self {
            objective: program.objective,
            cost,
            constraints,
            rhs: program.constraints.iter().map(|constraint| constraint.rhs).collect(),
            variable_names,
            nr_original_variables: nr_original,
        })
    }

    /// Number of constraints (and of slack variables).
    pub fn nr_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Total number of variables, original and slack.
    pub fn nr_variables(&self) -> usize {
        self.variable_names.len()
    }

    /// Names of the slack variables, in constraint order.
    pub fn slack_names(&self) -> &[String] {
        &self.variable_names[self.nr_original_variables..]
    }

    /// Names of the original decision variables, in declaration order.
    pub fn original_names(&self) -> &[String] {
        &self.variable_names[..self.nr_original_variables]
    }
}
