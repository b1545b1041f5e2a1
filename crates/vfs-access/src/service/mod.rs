//! Access decisions

mod evaluator;

pub use evaluator::PermissionEvaluator;
