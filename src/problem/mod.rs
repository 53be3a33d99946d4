//! Generic problem contract.
//!
//! A [`Problem`] evaluates solutions of a single [`Solution`] type and
//! knows how to create and copy them, so that search drivers and
//! neighborhoods never need type-specific construction logic.

mod types;

pub use types::{Direction, Problem, Solution};
