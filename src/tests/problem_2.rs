//! Minimization in three variables.
//!
//! Minimize `-2 x1 - 3 x2 - x3` subject to `x1 + x2 + x3 <= 10`, `x1 + 2 x2 <= 8` and
//! `x3 <= 4`. Internally the engine maximizes `2 x1 + 3 x2 + x3`; the reported objective value
//! must be negated back into the caller's minimization sense.
use crate::algorithm::sensitivity::analyze;
use crate::algorithm::simplex::logic::{solve, SolveStatus};
use crate::algorithm::simplex::standard_form::StandardForm;
use crate::algorithm::simplex::tableau::Tableau;
use crate::data::linear_program::elements::{Constraint, ConstraintType, LinearProgram, Objective};

fn general_form() -> LinearProgram {
    LinearProgram::new(
        Objective::Minimize,
        vec![-2.0, -3.0, -1.0],
        vec![
            Constraint::new(vec![1.0, 1.0, 1.0], ConstraintType::Less, 10.0),
            Constraint::new(vec![1.0, 2.0, 0.0], ConstraintType::Less, 8.0),
            Constraint::new(vec![0.0, 0.0, 1.0], ConstraintType::Less, 4.0),
        ],
        vec!["x1".to_string(), "x2".to_string(), "x3".to_string()],
    )
}

#[test]
fn conversion_pipeline() {
    let program = general_form();

    // Standard form: the minimization objective is negated, slacks s1..s3 are appended.
    let form = StandardForm::derive(&program).unwrap();
    assert_eq!(form.cost, vec![2.0, 3.0, 1.0, 0.0, 0.0, 0.0]);
    assert_eq!(form.nr_original_variables, 3);
    assert_eq!(form.variable_names, vec!["x1", "x2", "x3", "s1", "s2", "s3"]);

    // Initial tableau: objective row is the negated extended cost.
    let tableau = Tableau::initial(&form);
    assert_eq!(tableau.objective_row(), &[-2.0, -3.0, -1.0, 0.0, 0.0, 0.0, 0.0]);
    assert_eq!(tableau.nonbasic_variables(), &["x1", "x2", "x3"]);

    // Full run: three pivots (x2 for s2, x3 for s3, x1 for s1) to the optimum at (4, 2, 4).
    let solution = solve(&program).unwrap();
    assert_eq!(solution.status, SolveStatus::Optimal);
    assert_eq!(solution.tableaus.len(), 4);
    let pivots: Vec<_> = solution
        .tableaus
        .iter()
        .filter_map(|tableau| tableau.pivot_choice())
        .map(|choice| (choice.entering.as_str(), choice.leaving.as_str()))
        .collect();
    assert_eq!(pivots, vec![("x2", "s2"), ("x3", "s3"), ("x1", "s1")]);

    assert!((solution.solution.value_of("x1").unwrap() - 4.0).abs() < 1e-9);
    assert!((solution.solution.value_of("x2").unwrap() - 2.0).abs() < 1e-9);
    assert!((solution.solution.value_of("x3").unwrap() - 4.0).abs() < 1e-9);

    // The reported value is in the minimization sense.
    let reported = solution.solution.objective_value;
    assert!((reported - (-18.0)).abs() < 1e-9);

    // Every constraint is satisfied by the reported assignment.
    let point: Vec<f64> = solution.solution.variable_values.iter().map(|&(_, value)| value).collect();
    assert!(program.constraints.iter().all(|constraint| constraint.is_satisfied(&point, 1e-9)));

    // The internal tableau value is the negation of the reported one.
    let final_tableau = solution.tableaus.last().unwrap();
    assert!((final_tableau.objective_value() + reported).abs() < 1e-9);

    // Sensitivity projection: one price per constraint, one reduced cost per variable. The third
    // constraint binds degenerately and carries no price.
    let sensitivity = analyze(&solution);
    assert_eq!(sensitivity.reduced_costs.len(), 3);
    let names: Vec<&str> = sensitivity
        .shadow_prices
        .iter()
        .map(|(name, _)| name.as_str())
        .collect();
    assert_eq!(names, vec!["s1", "s2", "s3"]);
    let prices: Vec<f64> = sensitivity.shadow_prices.iter().map(|&(_, price)| price).collect();
    assert!((prices[0] - 1.0).abs() < 1e-9);
    assert!((prices[1] - 1.0).abs() < 1e-9);
    assert!(prices[2].abs() < 1e-9);
}
