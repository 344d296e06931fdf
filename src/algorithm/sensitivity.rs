//! # Post-optimal sensitivity analysis
//!
//! A read-only projection of a finished run: shadow prices and reduced costs are read straight
//! out of the final tableau's objective row, labeled with names taken from the initial tableau.
//! Nothing is stored; the analysis is recomputed on demand from the retained history.
use serde::Serialize;

use crate::algorithm::simplex::logic::SimplexSolution;

/// Shadow prices and reduced costs derived from a finished run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SensitivityResult {
    /// One entry per constraint, in constraint order, labeled with the slack variable that
    /// started basic in that constraint's row: the rate of change of the optimal objective value
    /// per unit increase of the constraint's right-hand side.
    pub shadow_prices: Vec<(String, f64)>,
    /// One entry per original decision variable, in declaration order: the amount by which that
    /// variable's objective coefficient would need to improve before the variable could enter the
    /// optimal basis. Zero for variables that are basic at the optimum.
    pub reduced_costs: Vec<(String, f64)>,
}

/// Derive sensitivity information from a run.
///
/// Reads the first tableau for labeling (before any pivot, the non-basic variables are exactly
/// the original decision variables and the basic ones are the slacks, in constraint order) and
/// the last tableau's objective row for the values. The solution itself is never modified.
///
/// The values are meaningful for an optimal run; for other terminal states this returns the same
/// projection of the last tableau, which the caller should interpret with care. Values are in the
/// internal maximization convention.
pub fn analyze(solution: &SimplexSolution) -> SensitivityResult {
    let (Some(first), Some(last)) = (solution.tableaus.first(), solution.tableaus.last()) else {
        return SensitivityResult { shadow_prices: Vec::new(), reduced_costs: Vec::new() };
    };

    let nr_original = first.nonbasic_variables().len();
    let objective_row = last.objective_row();

    let shadow_prices = (0..first.nr_rows())
        .map(|i| {
            let name = first
                .basic_variables()
                .get(i)
                .cloned()
                .unwrap_or_else(|| format!("s{}", i + 1));
            (name, objective_row[nr_original + i])
        })
        .collect();

    let reduced_costs = (0..nr_original)
        .map(|i| (first.nonbasic_variables()[i].clone(), objective_row[i]))
        .collect();

    SensitivityResult { shadow_prices, reduced_costs }
}
