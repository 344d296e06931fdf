//! # Building blocks to describe linear programs.
use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A `Constraint` is a type of (in)equality.
///
/// The simplex engine only accepts `Less` constraints (with non-negative right-hand sides, such
/// that the origin is feasible); the graphical solver handles all three types.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum ConstraintType {
    Equal,
    Greater,
    Less,
}

impl fmt::Display for ConstraintType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Equal => "=",
            Self::Greater => ">=",
            Self::Less => "<=",
        })
    }
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Objective {
    Maximize,
    Minimize,
}

/// A single linear constraint.
///
/// The coefficient at index `i` belongs to the variable at index `i` of the program's variable
/// list. Constructed once from input and never mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    /// One coefficient per decision variable, in declaration order.
    pub coefficients: Vec<f64>,
    /// Relation between the left-hand side and `rhs`.
    pub direction: ConstraintType,
    /// Right-hand side value.
    pub rhs: f64,
}

impl Constraint {
    /// A plain constructor.
    pub fn new(coefficients: Vec<f64>, direction: ConstraintType, rhs: f64) -> Self {
        Self { coefficients, direction, rhs }
    }

    /// Value of the left-hand side at a point.
    pub fn evaluate(&self, point: &[f64]) -> f64 {
        self.coefficients.iter().zip(point).map(|(a, x)| a * x).sum()
    }

    /// Whether a point satisfies this constraint, up to `tolerance`.
    pub fn is_satisfied(&self, point: &[f64], tolerance: f64) -> bool {
        let lhs = self.evaluate(point);
        match self.direction {
            ConstraintType::Equal => (lhs - self.rhs).abs() <= tolerance,
            ConstraintType::Greater => lhs >= self.rhs - tolerance,
            ConstraintType::Less => lhs <= self.rhs + tolerance,
        }
    }
}

/// A linear program as provided by the caller.
///
/// Decision variables are implicitly non-negative. The description is immutable; solving never
/// modifies it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearProgram {
    /// Whether the objective is maximized or minimized.
    pub objective: Objective,
    /// Objective coefficients, one per decision variable, in declaration order.
    pub cost: Vec<f64>,
    /// Constraints, in declaration order.
    pub constraints: Vec<Constraint>,
    /// Unique, case-sensitive variable names, in declaration order.
    pub variable_names: Vec<String>,
}

impl LinearProgram {
    /// A plain constructor.
    pub fn new(
        objective: Objective,
        cost: Vec<f64>,
        constraints: Vec<Constraint>,
        variable_names: Vec<String>,
    ) -> Self {
        Self { objective, cost, constraints, variable_names }
    }

    /// Number of decision variables.
    pub fn nr_variables(&self) -> usize {
        self.variable_names.len()
    }

    /// Number of constraints.
    pub fn nr_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Value of the objective function at a point.
    pub fn objective_value_at(&self, point: &[f64]) -> f64 {
        self.cost.iter().zip(point).map(|(c, x)| c * x).sum()
    }

    /// Check the shape invariants of this description.
    ///
    /// The dimension of the objective and of every constraint must match the number of declared
    /// variables, there must be at least one variable and one constraint, and variable names must
    /// be unique. Restrictions specific to the simplex engine (constraint type, sign of the
    /// right-hand side) are checked during standard form derivation instead, since the graphical
    /// solver does not share them.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.variable_names.is_empty() {
            return Err(ValidationError::NoVariables);
        }
        if self.constraints.is_empty() {
            return Err(ValidationError::NoConstraints);
        }
        if self.cost.len() != self.nr_variables() {
            return Err(ValidationError::CostLengthMismatch {
                expected: self.nr_variables(),
                found: self.cost.len(),
            });
        }
        for (i, constraint) in self.constraints.iter().enumerate() {
            if constraint.coefficients.len() != self.nr_variables() {
                return Err(ValidationError::ConstraintLengthMismatch {
                    constraint: i,
                    expected: self.nr_variables(),
                    found: constraint.coefficients.len(),
                });
            }
        }
        for (i, name) in self.variable_names.iter().enumerate() {
            if self.variable_names[(i + 1)..].contains(name) {
                return Err(ValidationError::DuplicateVariableName(name.clone()));
            }
        }

        Ok(())
    }
}

/// A `ValidationError` is created when a problem description can't be accepted.
///
/// Only genuinely invalid input is an error; algorithmic outcomes such as unboundedness are
/// reported as normal result states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The program declares no decision variables.
    NoVariables,
    /// The program has no constraints.
    NoConstraints,
    /// The objective dimension doesn't match the number of variables.
    CostLengthMismatch {
        /// Number of declared variables.
        expected: usize,
        /// Number of objective coefficients provided.
        found: usize,
    },
    /// A constraint's dimension doesn't match the number of variables.
    ConstraintLengthMismatch {
        /// Index of the offending constraint.
        constraint: usize,
        /// Number of declared variables.
        expected: usize,
        /// Number of coefficients provided.
        found: usize,
    },
    /// Two variables share a name.
    DuplicateVariableName(String),
    /// The simplex engine only supports "<=" constraints (no phase-1 procedure).
    UnsupportedConstraintType {
        /// Index of the offending constraint.
        constraint: usize,
        /// The type that was provided.
        found: ConstraintType,
    },
    /// The simplex engine requires non-negative right-hand sides (origin feasibility).
    NegativeRhs {
        /// Index of the offending constraint.
        constraint: usize,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NoVariables => write!(f, "the program declares no decision variables"),
            Self::NoConstraints => write!(f, "the program has no constraints"),
            Self::CostLengthMismatch { expected, found } => write!(
                f,
                "the objective has {} coefficients while {} variables are declared",
                found, expected,
            ),
            Self::ConstraintLengthMismatch { constraint, expected, found } => write!(
                f,
                "constraint {} has {} coefficients while {} variables are declared",
                constraint, found, expected,
            ),
            Self::DuplicateVariableName(name) => {
                write!(f, "variable name \"{}\" is declared more than once", name)
            },
            Self::UnsupportedConstraintType { constraint, found } => write!(
                f,
                "constraint {} is of type \"{}\"; only \"<=\" constraints are supported",
                constraint, found,
            ),
            Self::NegativeRhs { constraint } => write!(
                f,
                "constraint {} has a negative right-hand side; the origin must be feasible",
                constraint,
            ),
        }
    }
}

impl Error for ValidationError {
}
