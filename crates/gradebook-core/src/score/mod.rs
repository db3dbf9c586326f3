//! Score grading.
//!
//! This module contains the grading types and the grade engine:
//! - `Grade` - letter grades (S, A, B, C, D, E, U) and their grade points
//! - `CURVE`, `OVERALL_THRESHOLDS` - the fixed grading tables
//! - `compute_grades` - curve-grade a set of subject scores

mod engine;
mod grade;

pub use engine::*;
pub use grade::*;
