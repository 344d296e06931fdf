//! # Graphical method for two-variable programs
//!
//! An independent, purely geometric solver: enumerate the candidate corner points of the feasible
//! region (axis intercepts and pairwise constraint line intersections), keep the feasible ones,
//! and scan them for the best objective value. Only applicable to exactly two decision variables.
//! The output is shaped for rendering: the feasible region comes back as a simple polygon and the
//! plot bounds leave some headroom around it.
//!
//! Unlike the simplex engine, this solver handles all three constraint types; non-negativity of
//! both coordinates is always assumed and not read from the constraint list.
use std::cmp::Ordering;

use itertools::Itertools;
use serde::Serialize;

use crate::data::linear_program::elements::{ConstraintType, LinearProgram, Objective};

/// Constraint line pairs with a 2x2 determinant below this magnitude are treated as parallel and
/// produce no intersection candidate.
pub const PARALLEL_TOLERANCE: f64 = 1e-8;
/// Slack allowed when testing a candidate point against a constraint.
pub const FEASIBILITY_TOLERANCE: f64 = 1e-8;
/// Candidate points within this distance per coordinate are considered the same vertex.
pub const DEDUPLICATION_TOLERANCE: f64 = 1e-6;

/// A point in the plane of the two decision variables.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// A plain constructor.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn coincides_with(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < DEDUPLICATION_TOLERANCE
            && (self.y - other.y).abs() < DEDUPLICATION_TOLERANCE
    }
}

/// A constraint restricted to two variables, as a line in the plane.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct ConstraintLine {
    /// Coefficients of the two decision variables.
    pub coefficients: (f64, f64),
    /// Relation of `coefficients . (x, y)` to `rhs`.
    pub direction: ConstraintType,
    /// Right-hand side value.
    pub rhs: f64,
}

impl ConstraintLine {
    /// Whether a point lies on the feasible side of this constraint, up to
    /// [`FEASIBILITY_TOLERANCE`].
    pub fn admits(&self, point: Point) -> bool {
        let lhs = self.coefficients.0 * point.x + self.coefficients.1 * point.y;
        match self.direction {
            ConstraintType::Equal => (lhs - self.rhs).abs() <= FEASIBILITY_TOLERANCE,
            ConstraintType::Greater => lhs >= self.rhs - FEASIBILITY_TOLERANCE,
            ConstraintType::Less => lhs <= self.rhs + FEASIBILITY_TOLERANCE,
        }
    }

    /// Intersection of the boundary lines of two constraints, through a 2x2 linear solve.
    ///
    /// `None` when the lines are parallel (determinant magnitude below
    /// [`PARALLEL_TOLERANCE`]).
    pub fn intersect(&self, other: &Self) -> Option<Point> {
        let (a1, b1) = self.coefficients;
        let (a2, b2) = other.coefficients;
        let determinant = a1 * b2 - a2 * b1;
        if determinant.abs() < PARALLEL_TOLERANCE {
            return None;
        }

        Some(Point::new(
            (self.rhs * b2 - other.rhs * b1) / determinant,
            (a1 * other.rhs - a2 * self.rhs) / determinant,
        ))
    }

    /// The intercepts of the boundary line with the two axes, where the respective coefficient is
    /// nonzero.
    fn intercepts(&self) -> impl Iterator<Item = Point> {
        let (a, b) = self.coefficients;
        let with_x_axis = (a.abs() >= PARALLEL_TOLERANCE).then(|| Point::new(self.rhs / a, 0.0));
        let with_y_axis = (b.abs() >= PARALLEL_TOLERANCE).then(|| Point::new(0.0, self.rhs / b));

        with_x_axis.into_iter().chain(with_y_axis)
    }
}

/// Everything the geometric solve produced, shaped for rendering.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphicalSolution {
    /// The constraints as lines in the plane, in declaration order.
    pub constraint_lines: Vec<ConstraintLine>,
    /// Deduplicated feasible corner points. Ordered by angle around their centroid when there are
    /// at least three, so they form a simple polygon; returned as found otherwise.
    pub feasible_region: Vec<Point>,
    /// The best feasible corner point, absent when the region is empty.
    pub optimal_point: Option<Point>,
    /// Objective value at `optimal_point`.
    pub optimal_value: Option<f64>,
    /// Render bound of the horizontal axis.
    pub max_x: f64,
    /// Render bound of the vertical axis.
    pub max_y: f64,
}

/// Solve a two-variable program geometrically.
///
/// `None` when the method is not applicable: the program must be valid and declare exactly two
/// decision variables. Runs independently of the simplex engine, off the same problem
/// description.
pub fn solve(program: &LinearProgram) -> Option<GraphicalSolution> {
    if program.nr_variables() != 2 {
        return None;
    }
    program.validate().ok()?;

    let lines: Vec<ConstraintLine> = program
        .constraints
        .iter()
        .map(|constraint| ConstraintLine {
            coefficients: (constraint.coefficients[0], constraint.coefficients[1]),
            direction: constraint.direction,
            rhs: constraint.rhs,
        })
        .collect();

    let candidates = candidate_vertices(&lines);
    let feasible = deduplicate(
        candidates
            .into_iter()
            .filter(|&point| is_feasible(&lines, point))
            .collect(),
    );

    let incumbent = best_vertex(program, &feasible);
    let (max_x, max_y) = render_bounds(&lines, &feasible);

    Some(GraphicalSolution {
        constraint_lines: lines,
        feasible_region: order_as_polygon(feasible),
        optimal_point: incumbent,
        optimal_value: incumbent.map(|point| program.objective_value_at(&[point.x, point.y])),
        max_x,
        max_y,
    })
}

/// The origin, every axis intercept, and every pairwise line intersection.
fn candidate_vertices(lines: &[ConstraintLine]) -> Vec<Point> {
    let mut candidates = vec![Point::new(0.0, 0.0)];
    candidates.extend(lines.iter().flat_map(ConstraintLine::intercepts));
    candidates.extend(
        lines
            .iter()
            .tuple_combinations()
            .filter_map(|(line, other)| line.intersect(other)),
    );

    candidates
}

/// A candidate is feasible when every constraint admits it and both coordinates are non-negative.
fn is_feasible(lines: &[ConstraintLine], point: Point) -> bool {
    point.x >= -FEASIBILITY_TOLERANCE
        && point.y >= -FEASIBILITY_TOLERANCE
        && lines.iter().all(|line| line.admits(point))
}

/// Drop near-coincident points; the first one seen wins.
fn deduplicate(points: Vec<Point>) -> Vec<Point> {
    let mut unique: Vec<Point> = Vec::with_capacity(points.len());
    for point in points {
        if !unique.iter().any(|kept| kept.coincides_with(&point)) {
            unique.push(point);
        }
    }

    unique
}

/// Scan the feasible points for the best objective value.
///
/// The first point becomes the incumbent unconditionally; after that only a strict improvement
/// replaces it, so ties resolve to the earliest point in candidate order.
fn best_vertex(program: &LinearProgram, feasible: &[Point]) -> Option<Point> {
    let mut best: Option<(Point, f64)> = None;
    for &point in feasible {
        let value = program.objective_value_at(&[point.x, point.y]);
        let improves = best.map_or(true, |(_, incumbent)| match program.objective {
            Objective::Maximize => value > incumbent,
            Objective::Minimize => value < incumbent,
        });
        if improves {
            best = Some((point, value));
        }
    }

    best.map(|(point, _)| point)
}

/// Order at least three points by angle around their centroid, producing a simple polygon.
/// Fewer points are returned as they are.
fn order_as_polygon(mut points: Vec<Point>) -> Vec<Point> {
    if points.len() < 3 {
        return points;
    }

    let nr_points = points.len() as f64;
    let center_x = points.iter().map(|point| point.x).sum::<f64>() / nr_points;
    let center_y = points.iter().map(|point| point.y).sum::<f64>() / nr_points;
    points.sort_by(|a, b| {
        let angle_a = (a.y - center_y).atan2(a.x - center_x);
        let angle_b = (b.y - center_y).atan2(b.x - center_x);
        angle_a.partial_cmp(&angle_b).unwrap_or(Ordering::Equal)
    });

    points
}

/// Per-axis render maximum: 1.1 times the largest coordinate among intercepts and feasible
/// points, with the observed maximum clamped up to 1 so an all-zero region still gets a viewport.
fn render_bounds(lines: &[ConstraintLine], feasible: &[Point]) -> (f64, f64) {
    let coordinates = lines
        .iter()
        .flat_map(|line| line.intercepts())
        .chain(feasible.iter().copied());

    let (mut max_x, mut max_y) = (0.0_f64, 0.0_f64);
    for point in coordinates {
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }

    (1.1 * max_x.max(1.0), 1.1 * max_y.max(1.0))
}

#[cfg(test)]
mod test {
    use crate::algorithm::graphical::{solve, ConstraintLine, Point};
    use crate::data::linear_program::elements::{Constraint, ConstraintType, LinearProgram, Objective};

    fn wyndor() -> LinearProgram {
        LinearProgram::new(
            Objective::Maximize,
            vec![3.0, 5.0],
            vec![
                Constraint::new(vec![1.0, 0.0], ConstraintType::Less, 4.0),
                Constraint::new(vec![0.0, 2.0], ConstraintType::Less, 12.0),
                Constraint::new(vec![3.0, 2.0], ConstraintType::Less, 18.0),
            ],
            vec!["x1".to_string(), "x2".to_string()],
        )
    }

    #[test]
    fn wyndor_optimum() {
        let solution = solve(&wyndor()).unwrap();

        let optimal = solution.optimal_point.unwrap();
        assert!((optimal.x - 2.0).abs() < 1e-6);
        assert!((optimal.y - 6.0).abs() < 1e-6);
        assert!((solution.optimal_value.unwrap() - 36.0).abs() < 1e-6);
    }

    #[test]
    fn wyndor_region_is_a_pentagon() {
        let solution = solve(&wyndor()).unwrap();
        // (0,0), (4,0), (4,3), (2,6), (0,6)
        assert_eq!(solution.feasible_region.len(), 5);
        for expected in [
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 3.0),
            Point::new(2.0, 6.0),
            Point::new(0.0, 6.0),
        ] {
            assert!(
                solution.feasible_region.iter().any(|point| point.coincides_with(&expected)),
                "missing vertex {:?}",
                expected,
            );
        }

        // Angle ordering around the centroid makes consecutive runs of the polygon monotone in
        // angle, which is what a renderer needs for a simple area fill.
        let nr_points = solution.feasible_region.len() as f64;
        let cx = solution.feasible_region.iter().map(|p| p.x).sum::<f64>() / nr_points;
        let cy = solution.feasible_region.iter().map(|p| p.y).sum::<f64>() / nr_points;
        let angles: Vec<f64> = solution
            .feasible_region
            .iter()
            .map(|p| (p.y - cy).atan2(p.x - cx))
            .collect();
        assert!(angles.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn render_bounds_have_headroom() {
        let solution = solve(&wyndor()).unwrap();
        // Largest x coordinate is the x-intercept of the third constraint, 18 / 3 = 6.
        assert!((solution.max_x - 1.1 * 6.0).abs() < 1e-9);
        // Largest y coordinate is the y-intercept of the third constraint, 18 / 2 = 9.
        assert!((solution.max_y - 1.1 * 9.0).abs() < 1e-9);
    }

    #[test]
    fn not_applicable_beyond_two_variables() {
        let program = LinearProgram::new(
            Objective::Maximize,
            vec![1.0, 1.0, 1.0],
            vec![Constraint::new(vec![1.0, 1.0, 1.0], ConstraintType::Less, 1.0)],
            vec!["x1".to_string(), "x2".to_string(), "x3".to_string()],
        );
        assert!(solve(&program).is_none());
    }

    #[test]
    fn parallel_lines_are_skipped() {
        let line = ConstraintLine {
            coefficients: (1.0, 1.0),
            direction: ConstraintType::Less,
            rhs: 4.0,
        };
        let parallel = ConstraintLine { rhs: 8.0, ..line };
        assert_eq!(line.intersect(&parallel), None);

        // A program containing both still solves; the tighter line bounds the region.
        let program = LinearProgram::new(
            Objective::Maximize,
            vec![1.0, 1.0],
            vec![
                Constraint::new(vec![1.0, 1.0], ConstraintType::Less, 4.0),
                Constraint::new(vec![1.0, 1.0], ConstraintType::Less, 8.0),
            ],
            vec!["x".to_string(), "y".to_string()],
        );
        let solution = solve(&program).unwrap();
        assert!((solution.optimal_value.unwrap() - 4.0).abs() < 1e-6);
    }

    #[test]
    fn handles_greater_constraints() {
        // Minimize over a region the simplex engine would reject: 2x + y >= 10, x + 2y >= 8,
        // x + y <= 12.
        let program = LinearProgram::new(
            Objective::Minimize,
            vec![5.0, 3.0],
            vec![
                Constraint::new(vec![2.0, 1.0], ConstraintType::Greater, 10.0),
                Constraint::new(vec![1.0, 2.0], ConstraintType::Greater, 8.0),
                Constraint::new(vec![1.0, 1.0], ConstraintType::Less, 12.0),
            ],
            vec!["x".to_string(), "y".to_string()],
        );
        let solution = solve(&program).unwrap();

        let optimal = solution.optimal_point.unwrap();
        assert!((optimal.x - 4.0).abs() < 1e-6);
        assert!((optimal.y - 2.0).abs() < 1e-6);
        assert!((solution.optimal_value.unwrap() - 26.0).abs() < 1e-6);
    }

    #[test]
    fn empty_region_has_no_optimum() {
        let program = LinearProgram::new(
            Objective::Maximize,
            vec![1.0, 1.0],
            vec![
                Constraint::new(vec![1.0, 1.0], ConstraintType::Less, 1.0),
                Constraint::new(vec![1.0, 1.0], ConstraintType::Greater, 5.0),
            ],
            vec!["x".to_string(), "y".to_string()],
        );
        let solution = solve(&program).unwrap();
        assert_eq!(solution.optimal_point, None);
        assert_eq!(solution.optimal_value, None);
        assert!(solution.feasible_region.is_empty());
    }
}
