mod problem;

pub use problem::{Constraint, Goal, Problem, Relation};
