use bigm_simplex::{solve, Goal, Problem, Relation, SolverConfig, Status};

fn config() -> SolverConfig {
    SolverConfig::default()
}

/// S1: max 5x1+4x2+3x3 s.t. 2x1+3x2+x3<=5, 4x1+x2+2x3<=11, 3x1+4x2+2x3<=8.
#[test]
fn s1_all_le_three_var_max() {
    let mut p = Problem::new(vec![5.0, 4.0, 3.0], Goal::Max);
    p.add_constraint(vec![2.0, 3.0, 1.0], Relation::LessEqual, 5.0);
    p.add_constraint(vec![4.0, 1.0, 2.0], Relation::LessEqual, 11.0);
    p.add_constraint(vec![3.0, 4.0, 2.0], Relation::LessEqual, 8.0);
    let outcome = solve(p, &config()).unwrap();
    assert_eq!(outcome.status, Status::Optimal { multiple: false });
    assert!((outcome.objective - 13.0).abs() < 1e-6);
}

/// S2: max 6x1-9x2+x3-11x4 s.t. 2x1-3x2-x3-7x4<=1, 2x1+x2+x3+3x4<=3.
#[test]
fn s2_mixed_sign_coefficients() {
    let mut p = Problem::new(vec![6.0, -9.0, 1.0, -11.0], Goal::Max);
    p.add_constraint(vec![2.0, -3.0, -1.0, -7.0], Relation::LessEqual, 1.0);
    p.add_constraint(vec![2.0, 1.0, 1.0, 3.0], Relation::LessEqual, 3.0);
    let outcome = solve(p, &config()).unwrap();
    assert!((outcome.objective - 7.0).abs() < 1e-6);
}

/// S3: max 3x1+2x2 s.t. x1+x2=4. optimal=12, solution=[4,0].
#[test]
fn s3_single_equality_row() {
    let mut p = Problem::new(vec![3.0, 2.0], Goal::Max);
    p.add_constraint(vec![1.0, 1.0], Relation::Equal, 4.0);
    let outcome = solve(p, &config()).unwrap();
    assert_eq!(outcome.status, Status::Optimal { multiple: false });
    assert!((outcome.objective - 12.0).abs() < 1e-6);
    assert!((outcome.values[0] - 4.0).abs() < 1e-6);
    assert!((outcome.values[1] - 0.0).abs() < 1e-6);
}

/// S4: max 2x1+x2 s.t. x1+x2>=3, x1<=2, x2<=3. optimal=7, solution=[2,3].
#[test]
fn s4_greater_equal_row() {
    let mut p = Problem::new(vec![2.0, 1.0], Goal::Max);
    p.add_constraint(vec![1.0, 1.0], Relation::GreaterEqual, 3.0);
    p.add_constraint(vec![1.0, 0.0], Relation::LessEqual, 2.0);
    p.add_constraint(vec![0.0, 1.0], Relation::LessEqual, 3.0);
    let outcome = solve(p, &config()).unwrap();
    assert!((outcome.objective - 7.0).abs() < 1e-6);
    assert!((outcome.values[0] - 2.0).abs() < 1e-6);
    assert!((outcome.values[1] - 3.0).abs() < 1e-6);
}

/// S5: min of S1's objective over S1's constraints. optimal=0 at the origin.
#[test]
fn s5_minimize_same_constraints_as_s1() {
    let mut p = Problem::new(vec![5.0, 4.0, 3.0], Goal::Min);
    p.add_constraint(vec![2.0, 3.0, 1.0], Relation::LessEqual, 5.0);
    p.add_constraint(vec![4.0, 1.0, 2.0], Relation::LessEqual, 11.0);
    p.add_constraint(vec![3.0, 4.0, 2.0], Relation::LessEqual, 8.0);
    let outcome = solve(p, &config()).unwrap();
    assert!((outcome.objective - 0.0).abs() < 1e-6);
    for value in &outcome.values {
        assert!(value.abs() < 1e-6);
    }
}

/// S6: max x1+x2 s.t. x1-x2<=1, -x1+x2<=1. UNBOUNDED.
#[test]
fn s6_unbounded_ridge() {
    let mut p = Problem::new(vec![1.0, 1.0], Goal::Max);
    p.add_constraint(vec![1.0, -1.0], Relation::LessEqual, 1.0);
    p.add_constraint(vec![-1.0, 1.0], Relation::LessEqual, 1.0);
    let outcome = solve(p, &config()).unwrap();
    assert_eq!(outcome.status, Status::Unbounded);
}

#[test]
fn negative_rhs_row_is_accepted_via_normalization() {
    let mut p = Problem::new(vec![1.0, 1.0], Goal::Max);
    p.add_constraint(vec![-1.0, -1.0], Relation::LessEqual, -2.0);
    p.add_constraint(vec![1.0, 0.0], Relation::LessEqual, 5.0);
    p.add_constraint(vec![0.0, 1.0], Relation::LessEqual, 5.0);
    let outcome = solve(p, &config()).unwrap();
    assert_eq!(outcome.status, Status::Optimal { multiple: false });
}

#[test]
fn n_equals_one_is_a_legal_problem() {
    let mut p = Problem::new(vec![2.0], Goal::Max);
    p.add_constraint(vec![1.0], Relation::LessEqual, 10.0);
    let outcome = solve(p, &config()).unwrap();
    assert!((outcome.objective - 20.0).abs() < 1e-6);
    assert_eq!(outcome.values, vec![10.0]);
}

#[test]
fn infeasible_equality_system_reports_infeasible() {
    let mut p = Problem::new(vec![1.0, 1.0], Goal::Max);
    p.add_constraint(vec![1.0, 1.0], Relation::Equal, 2.0);
    p.add_constraint(vec![1.0, 1.0], Relation::Equal, 10.0);
    let outcome = solve(p, &config()).unwrap();
    assert_eq!(outcome.status, Status::Infeasible);
}

#[test]
fn degenerate_alternate_optimum_is_flagged_multiple() {
    // x1+x2<=4 parallel to the objective direction 1,1 leaves a tied edge.
    let mut p = Problem::new(vec![1.0, 1.0], Goal::Max);
    p.add_constraint(vec![1.0, 1.0], Relation::LessEqual, 4.0);
    let outcome = solve(p, &config()).unwrap();
    assert_eq!(outcome.status, Status::Optimal { multiple: true });
    assert!((outcome.objective - 4.0).abs() < 1e-6);
}
