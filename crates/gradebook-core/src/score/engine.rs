//! Curve-based grade computation.
//!
//! Each subject score is graded relative to the class mean offset by multiples
//! of the population standard deviation (see [`CURVE`](super::CURVE)), and the
//! plain average of the resulting grade points decides the overall grade.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::score::Grade;

/// Number of subjects in one submission.
pub const SUBJECT_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubjectResult {
    /// 1-based subject number
    pub subject_index: usize,
    pub score: f64,
    pub grade: Grade,
    pub point: u8,
}

impl SubjectResult {
    pub fn label(&self) -> String {
        subject_label(self.subject_index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverallResult {
    /// Plain average of the subject grade points
    pub mean_point: f64,
    pub grade: Grade,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeReport {
    pub subjects: Vec<SubjectResult>,
    pub overall: OverallResult,
    pub mean: f64,
    pub std_dev: f64,
}

/// Display label for a 1-based subject number
pub fn subject_label(subject_index: usize) -> String {
    format!("Subject {}", subject_index)
}

/// Arithmetic mean and population standard deviation (divides by N).
pub fn population_stats(scores: &[f64]) -> (f64, f64) {
    if scores.is_empty() {
        return (0.0, 0.0);
    }
    let n = scores.len() as f64;
    let mean = scores.iter().sum::<f64>() / n;
    let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}

/// Grade a full set of subject scores.
///
/// Fails with [`Error::InvalidInputLength`] unless exactly [`SUBJECT_COUNT`]
/// scores are given, and with [`Error::NonFiniteScore`] on NaN or infinity.
/// Score values are otherwise unbounded.
pub fn compute_grades(scores: &[f64]) -> Result<GradeReport> {
    if scores.len() != SUBJECT_COUNT {
        return Err(Error::InvalidInputLength {
            expected: SUBJECT_COUNT,
            actual: scores.len(),
        });
    }
    if let Some((index, &value)) = scores.iter().enumerate().find(|(_, s)| !s.is_finite()) {
        return Err(Error::NonFiniteScore { index, value });
    }

    let (mean, std_dev) = population_stats(scores);
    debug!("Curve stats: mean={:.3}, std_dev={:.3}", mean, std_dev);

    let subjects: Vec<SubjectResult> = scores
        .iter()
        .enumerate()
        .map(|(i, &score)| {
            let grade = Grade::from_curve(score, mean, std_dev);
            SubjectResult {
                subject_index: i + 1,
                score,
                grade,
                point: grade.point(),
            }
        })
        .collect();

    let mean_point =
        subjects.iter().map(|s| f64::from(s.point)).sum::<f64>() / subjects.len() as f64;

    Ok(GradeReport {
        subjects,
        overall: OverallResult {
            mean_point,
            grade: Grade::from_mean_point(mean_point),
        },
        mean,
        std_dev,
    })
}
