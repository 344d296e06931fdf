//! # High-level Simplex logic
//!
//! The driver loop of the method: repeatedly select an entering and a leaving variable and pivot,
//! until either no entering candidate remains (optimal), no leaving candidate remains (unbounded)
//! or the iteration cap cuts the run short. Each tableau along the way is retained and each
//! decision is appended to the step log.
use log::{debug, warn};
use serde::Serialize;

use crate::algorithm::simplex::standard_form::StandardForm;
use crate::algorithm::simplex::step::{SimplexStep, StepAction};
use crate::algorithm::simplex::tableau::Tableau;
use crate::data::linear_program::elements::{LinearProgram, Objective, ValidationError};
use crate::data::linear_program::solution::Solution;

/// Default bound on the number of pivots.
///
/// Degenerate problems can in principle cycle; the cap guarantees termination regardless. Runs
/// that hit it are reported as [`SolveStatus::NonConvergent`].
pub const DEFAULT_ITERATION_CAP: usize = 50;

/// Configuration of a solver run.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SolveOptions {
    /// Maximum number of pivots before the run is declared non-convergent.
    pub iteration_cap: usize,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self { iteration_cap: DEFAULT_ITERATION_CAP }
    }
}

/// How a run ended.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub enum SolveStatus {
    /// No non-basic variable can improve the objective any further.
    Optimal,
    /// The objective can be improved without bound; there is no finite optimum.
    Unbounded,
    /// The iteration cap was reached before a terminal state; the history holds the last state
    /// computed, which must not be read as final.
    NonConvergent,
}

/// Everything a run produced: the terminal state, the extracted solution, and the full playback
/// history.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimplexSolution {
    /// How the run ended.
    pub status: SolveStatus,
    /// Values of the original variables in the last tableau. Only an optimum when `status` is
    /// [`SolveStatus::Optimal`].
    pub solution: Solution,
    /// Every tableau in iteration order, starting with the initial one. Never empty.
    pub tableaus: Vec<Tableau>,
    /// The decision log, in replay order.
    pub steps: Vec<SimplexStep>,
}

impl SimplexSolution {
    /// Whether a finite optimum was found.
    pub fn is_optimal(&self) -> bool {
        self.status == SolveStatus::Optimal
    }

    /// Whether the objective was found to be unbounded.
    pub fn is_unbounded(&self) -> bool {
        self.status == SolveStatus::Unbounded
    }

    /// Whether the problem is feasible.
    ///
    /// Always true: validation only admits "<=" constraints with non-negative right-hand sides,
    /// for which the origin is a feasible point.
    pub fn is_feasible(&self) -> bool {
        true
    }
}

/// Solve a linear program with the default options.
///
/// See [`solve_with`].
pub fn solve(program: &LinearProgram) -> Result<SimplexSolution, ValidationError> {
    solve_with(program, SolveOptions::default())
}

/// Solve a linear program, retaining the full iteration history.
///
/// The program is validated and brought into standard form first; a shape that the engine can't
/// handle (see [`StandardForm::derive`]) is the only error condition. Unboundedness and
/// non-convergence are normal result states, inspected through [`SimplexSolution::status`].
pub fn solve_with(
    program: &LinearProgram,
    options: SolveOptions,
) -> Result<SimplexSolution, ValidationError> {
    let form = StandardForm::derive(program)?;

    let mut steps = vec![SimplexStep::new(
        0,
        StepAction::ConvertToStandardForm,
        "Convert the problem to standard form",
        Some(format!(
            "{} slack variable(s) added: {}",
            form.nr_constraints(),
            form.slack_names().join(", "),
        )),
        None,
    )];

    let mut tableaus = vec![Tableau::initial(&form)];
    steps.push(SimplexStep::new(
        0,
        StepAction::InitialTableau,
        "Set up the initial tableau",
        Some("All slack variables are basic; the origin is the first basic feasible solution".to_string()),
        Some(0),
    ));

    let status = loop {
        let last = tableaus.len() - 1;
        debug_assert!(tableaus[last].is_basis_consistent());
        let iteration = tableaus[last].iteration();

        let Some(column) = tableaus[last].select_pivot_column() else {
            steps.push(SimplexStep::new(
                iteration,
                StepAction::Optimal,
                "All objective row entries are non-negative; the tableau is optimal",
                None,
                Some(last),
            ));
            break SolveStatus::Optimal;
        };
        let entering = tableaus[last].column_names()[column].clone();
        let entering_cost = tableaus[last].objective_row()[column];
        debug!("iteration {}: {} enters (objective entry {})", iteration, entering, entering_cost);
        steps.push(SimplexStep::new(
            iteration,
            StepAction::SelectEnteringVariable,
            format!("Select {} as entering variable", entering),
            Some(format!("most negative objective row entry: {}", entering_cost)),
            None,
        ));

        let Some(row) = tableaus[last].select_pivot_row(column) else {
            steps.push(SimplexStep::new(
                iteration,
                StepAction::Unbounded,
                format!("No positive entry in the {} column; the problem is unbounded", entering),
                None,
                Some(last),
            ));
            break SolveStatus::Unbounded;
        };
        let leaving = tableaus[last].basic_variables()[row].clone();
        let ratio = tableaus[last].constraint_value(row) / tableaus[last].element(row, column);
        debug!("iteration {}: {} leaves (minimum ratio {})", iteration, leaving, ratio);
        steps.push(SimplexStep::new(
            iteration,
            StepAction::SelectLeavingVariable,
            format!("Select {} as leaving variable", leaving),
            Some(format!("minimum ratio {} in row {}", ratio, row)),
            None,
        ));

        if iteration >= options.iteration_cap {
            warn!("iteration cap of {} reached without convergence", options.iteration_cap);
            break SolveStatus::NonConvergent;
        }

        let next = tableaus[last].pivot(row, column);
        steps.push(SimplexStep::new(
            next.iteration(),
            StepAction::Pivot,
            format!("Pivot: {} replaces {} in the basis", entering, leaving),
            Some(format!("pivot on row {}, column {}", row, column)),
            Some(tableaus.len()),
        ));
        tableaus.push(next);
    };

    let solution = extract_solution(&form, &tableaus[tableaus.len() - 1]);

    Ok(SimplexSolution { status, solution, tableaus, steps })
}

/// Read the values of the original variables out of a tableau.
///
/// Every original variable defaults to zero; rows whose basic variable is an original one
/// contribute their right-hand side. The objective value is the objective row's right-hand side
/// cell, negated back when the original problem was a minimization.
fn extract_solution(form: &StandardForm, tableau: &Tableau) -> Solution {
    let mut values: Vec<(String, f64)> = form
        .original_names()
        .iter()
        .map(|name| (name.clone(), 0.0))
        .collect();
    for (row, name) in tableau.basic_variables().iter().enumerate() {
        if let Some(position) = values.iter().position(|(variable, _)| variable == name) {
            values[position].1 = tableau.constraint_value(row);
        }
    }

    let objective_value = match form.objective {
        Objective::Maximize => tableau.objective_value(),
        Objective::Minimize => -tableau.objective_value(),
    };

    Solution::new(objective_value, values)
}
