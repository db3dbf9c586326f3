//! # gradebook-core
//!
//! Core library for the gradebook application.
//!
//! This crate provides:
//! - Curve-based grade computation (`score`)
//! - Student and admin records with a JSON file store (`storage`)
//! - Application configuration (`config`)

pub mod config;
pub mod error;
pub mod score;
pub mod storage;

pub use config::{Config, DefaultAdmin};
pub use error::{Error, Result};
pub use score::{
    CURVE, CurveBand, Grade, GradeReport, OVERALL_THRESHOLDS, OverallResult, SUBJECT_COUNT,
    SubjectResult, compute_grades, population_stats, subject_label,
};
pub use storage::{
    AdminAccount, JsonStore, MemoryStore, Role, StoreData, StudentRecord, StudentRepository,
    SubjectRecord,
};
