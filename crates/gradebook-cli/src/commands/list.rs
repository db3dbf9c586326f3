//! List command: show students and their overall grades.

use anyhow::Result;
use chrono::{DateTime, Utc};
use gradebook_core::{Config, Grade, StudentRecord, StudentRepository};
use serde::Serialize;
use std::fmt::Write;

use crate::cli_utils;

/// Student entry as exported by `list --json`; passwords are left out.
#[derive(Debug, Serialize)]
pub struct StudentSummary<'a> {
    pub username: &'a str,
    pub overall: Option<Grade>,
    pub graded_at: Option<DateTime<Utc>>,
}

impl<'a> From<&'a StudentRecord> for StudentSummary<'a> {
    fn from(record: &'a StudentRecord) -> Self {
        Self {
            username: &record.username,
            overall: record.overall,
            graded_at: record.graded_at,
        }
    }
}

pub fn run(config: &Config, json: bool) -> Result<()> {
    let store = cli_utils::open_store(config);
    let students = store.list_students()?;

    if json {
        let summaries: Vec<StudentSummary> = students.iter().map(StudentSummary::from).collect();
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        print!("{}", format_students(&students));
    }
    Ok(())
}

pub fn format_students(students: &[StudentRecord]) -> String {
    if students.is_empty() {
        return "No students registered\n".to_string();
    }
    let mut out = String::new();
    for student in students {
        let _ = writeln!(out, "{} - Overall Grade: {}", student.username, student.overall_label());
    }
    out
}
