//! # The Simplex tableau
//!
//! One `Tableau` is the complete state of the algorithm at one iteration: the dense
//! `(m + 1) x (n + 1)` matrix (constraint rows plus objective row, variable columns plus
//! right-hand side column) together with the names of the variables currently in and out of the
//! basis. Tableaus are immutable snapshots; pivoting produces a new value rather than updating in
//! place, so that a solution's iteration history can be kept and replayed.
use std::fmt;

use serde::Serialize;

use crate::algorithm::simplex::standard_form::StandardForm;

/// Objective-row entries no further than this below zero are treated as zero when testing for
/// optimality, absorbing floating point round-off from repeated row reduction.
pub const COST_TOLERANCE: f64 = 1e-10;

/// The pivot decision that produced a tableau.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PivotChoice {
    /// Constraint row pivoted on.
    pub row: usize,
    /// Variable column pivoted on.
    pub column: usize,
    /// Name of the variable that entered the basis.
    pub entering: String,
    /// Name of the variable that left the basis.
    pub leaving: String,
}

/// State snapshot of the simplex algorithm at one iteration.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tableau {
    /// `(m + 1) x (n + 1)` matrix. The last row is the objective row, the last column holds the
    /// right-hand sides (with the current objective value in the bottom-right cell).
    rows: Vec<Vec<f64>>,
    /// Names of all variable columns, original variables first, then slacks. Fixed over the whole
    /// run.
    column_names: Vec<String>,
    /// Basic variable per constraint row, in row order. Each of these variables' columns is a
    /// unit column.
    basis: Vec<String>,
    /// Variables currently out of the basis.
    nonbasic: Vec<String>,
    /// How many pivots were applied to reach this tableau.
    iteration: usize,
    /// The pivot that produced this tableau, absent for the initial one.
    pivot: Option<PivotChoice>,
}

impl Tableau {
    /// Build the initial tableau of a standard form program.
    ///
    /// Constraint rows are `[A | b]` and the objective row holds the negated cost coefficients
    /// with a trailing zero. All slacks start basic; their columns form an identity block by
    /// construction, so no pivoting is needed to reach this first basic feasible solution.
    pub fn initial(form: &StandardForm) -> Self {
        let mut rows: Vec<Vec<f64>> = form
            .constraints
            .iter()
            .zip(&form.rhs)
            .map(|(coefficients, &rhs)| {
                let mut row = coefficients.clone();
                row.push(rhs);
                row
            })
            .collect();
        let mut objective_row: Vec<f64> = form.cost.iter().map(|&c| -c).collect();
        objective_row.push(0.0);
        rows.push(objective_row);

        Self {
            rows,
            column_names: form.variable_names.clone(),
            basis: form.slack_names().to_vec(),
            nonbasic: form.original_names().to_vec(),
            iteration: 0,
            pivot: None,
        }
    }

    /// Number of constraint rows.
    pub fn nr_rows(&self) -> usize {
        self.rows.len() - 1
    }

    /// Number of variable columns, original and slack.
    pub fn nr_columns(&self) -> usize {
        self.column_names.len()
    }

    /// A single matrix element. The right-hand side column is at index `nr_columns()`.
    pub fn element(&self, row: usize, column: usize) -> f64 {
        self.rows[row][column]
    }

    /// The objective row, including its trailing right-hand side cell.
    pub fn objective_row(&self) -> &[f64] {
        &self.rows[self.nr_rows()]
    }

    /// Current objective function value (of the internal maximization).
    pub fn objective_value(&self) -> f64 {
        self.rows[self.nr_rows()][self.nr_columns()]
    }

    /// The right-hand side of a constraint row: the value of that row's basic variable.
    pub fn constraint_value(&self, row: usize) -> f64 {
        self.rows[row][self.nr_columns()]
    }

    /// Names of the basic variables, one per constraint row, in row order.
    pub fn basic_variables(&self) -> &[String] {
        &self.basis
    }

    /// Names of the variables currently out of the basis.
    pub fn nonbasic_variables(&self) -> &[String] {
        &self.nonbasic
    }

    /// Names of all variable columns, in column order.
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// How many pivots were applied to reach this tableau.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// The pivot decision that produced this tableau, absent for the initial one.
    pub fn pivot_choice(&self) -> Option<&PivotChoice> {
        self.pivot.as_ref()
    }

    /// Whether the variable owning a column is currently basic.
    pub fn is_basic(&self, column: usize) -> bool {
        self.basis.contains(&self.column_names[column])
    }

    /// Entering variable rule: the non-basic column with the most negative objective-row entry,
    /// ties broken towards the lowest column index.
    ///
    /// `None` means no entry is below `-COST_TOLERANCE`: the tableau is optimal.
    pub fn select_pivot_column(&self) -> Option<usize> {
        let objective_row = &self.rows[self.nr_rows()];
        let mut best: Option<(usize, f64)> = None;
        for column in 0..self.nr_columns() {
            if self.is_basic(column) {
                continue;
            }
            let cost = objective_row[column];
            if cost < -COST_TOLERANCE && best.map_or(true, |(_, lowest)| cost < lowest) {
                best = Some((column, cost));
            }
        }

        best.map(|(column, _)| column)
    }

    /// Leaving variable rule, the minimum-ratio test: among constraint rows with strictly
    /// positive entry in the entering column, the one minimizing `rhs / entry`, ties broken
    /// towards the lowest row index.
    ///
    /// `None` means the entering variable can be increased without bound: the problem is
    /// unbounded.
    pub fn select_pivot_row(&self, column: usize) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for row in 0..self.nr_rows() {
            let entry = self.rows[row][column];
            if entry > 0.0 {
                let ratio = self.constraint_value(row) / entry;
                if best.map_or(true, |(_, lowest)| ratio < lowest) {
                    best = Some((row, ratio));
                }
            }
        }

        best.map(|(row, _)| row)
    }

    /// Whether no non-basic column can still improve the objective.
    pub fn is_optimal(&self) -> bool {
        self.select_pivot_column().is_none()
    }

    /// Perform a pivot, producing the next tableau.
    ///
    /// The pivot row is divided by the pivot element and subtracted from every other row such
    /// that the pivot column becomes a unit column. The basic variable at `row` and the entering
    /// variable at `column` exchange places between the basis and non-basis name lists; this
    /// single swap is the defining update of which variables are in the basis.
    pub fn pivot(&self, row: usize, column: usize) -> Self {
        debug_assert!(row < self.nr_rows());
        debug_assert!(column < self.nr_columns());
        debug_assert!(self.rows[row][column] > 0.0);

        let mut rows = self.rows.clone();
        let pivot_element = rows[row][column];
        for value in &mut rows[row] {
            *value /= pivot_element;
        }
        let normalized = rows[row].clone();
        for (other, other_row) in rows.iter_mut().enumerate() {
            if other == row {
                continue;
            }
            let factor = other_row[column];
            if factor != 0.0 {
                for (value, &pivot_value) in other_row.iter_mut().zip(&normalized) {
                    *value -= factor * pivot_value;
                }
            }
        }

        let entering = self.column_names[column].clone();
        let leaving = self.basis[row].clone();
        let mut basis = self.basis.clone();
        let mut nonbasic = self.nonbasic.clone();
        basis[row] = entering.clone();
        if let Some(position) = nonbasic.iter().position(|name| name == &entering) {
            nonbasic[position] = leaving.clone();
        }

        Self {
            rows,
            column_names: self.column_names.clone(),
            basis,
            nonbasic,
            iteration: self.iteration + 1,
            pivot: Some(PivotChoice { row, column, entering, leaving }),
        }
    }

    /// Whether every basic variable's column is (up to floating error) a unit column with its one
    /// in that variable's row. Checked by the driver between iterations.
    pub(crate) fn is_basis_consistent(&self) -> bool {
        self.basis.iter().enumerate().all(|(row, name)| {
            let Some(column) = self.column_names.iter().position(|candidate| candidate == name)
            else {
                return false;
            };
            (0..self.nr_rows()).all(|other| {
                let expected = if other == row { 1.0 } else { 0.0 };
                (self.rows[other][column] - expected).abs() < 1e-6
            })
        })
    }
}

impl fmt::Display for Tableau {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:>8}", "basis")?;
        for name in &self.column_names {
            write!(f, "{:>12}", name)?;
        }
        writeln!(f, "{:>12}", "rhs")?;

        for (row, name) in self.basis.iter().enumerate() {
            write!(f, "{:>8}", name)?;
            for value in &self.rows[row] {
                write!(f, "{:>12.4}", value)?;
            }
            writeln!(f)?;
        }

        write!(f, "{:>8}", "z")?;
        for value in self.objective_row() {
            write!(f, "{:>12.4}", value)?;
        }
        writeln!(f)
    }
}
