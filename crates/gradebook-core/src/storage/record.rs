use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::DefaultAdmin;
use crate::error::{Error, Result};
use crate::score::{Grade, GradeReport};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminAccount {
    pub username: String,
    pub password: String,
}

/// One graded subject as stored on a student record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectRecord {
    pub subject: String,
    pub score: f64,
    pub grade: Grade,
    pub point: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub grades: Vec<SubjectRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall: Option<Grade>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graded_at: Option<DateTime<Utc>>,
}

impl StudentRecord {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            grades: Vec::new(),
            overall: None,
            graded_at: None,
        }
    }

    /// Replace any previous grades with the given report
    pub fn apply_report(&mut self, report: &GradeReport, graded_at: DateTime<Utc>) {
        self.grades = report
            .subjects
            .iter()
            .map(|s| SubjectRecord {
                subject: s.label(),
                score: s.score,
                grade: s.grade,
                point: s.point,
            })
            .collect();
        self.overall = Some(report.overall.grade);
        self.graded_at = Some(graded_at);
    }

    /// Overall grade for display, `N/A` until grades are submitted
    pub fn overall_label(&self) -> &'static str {
        self.overall.map(|g| g.short_name()).unwrap_or("N/A")
    }
}

/// Who a set of credentials belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Student,
}

/// The whole record store as persisted in the data file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StoreData {
    #[serde(default)]
    pub admins: Vec<AdminAccount>,
    #[serde(default)]
    pub students: Vec<StudentRecord>,
}

impl StoreData {
    /// A fresh store holding only the given admin account
    pub fn with_admin(admin: &DefaultAdmin) -> Self {
        Self {
            admins: vec![AdminAccount {
                username: admin.username.clone(),
                password: admin.password.clone(),
            }],
            students: Vec::new(),
        }
    }

    /// Admins are checked before students.
    pub fn authenticate(&self, username: &str, password: &str) -> Option<Role> {
        if self
            .admins
            .iter()
            .any(|a| a.username == username && a.password == password)
        {
            return Some(Role::Admin);
        }
        if self
            .students
            .iter()
            .any(|s| s.username == username && s.password == password)
        {
            return Some(Role::Student);
        }
        None
    }

    pub fn find_student(&self, username: &str) -> Option<&StudentRecord> {
        self.students.iter().find(|s| s.username == username)
    }

    pub fn create_student(&mut self, username: &str, password: &str) -> Result<StudentRecord> {
        if username.trim().is_empty() {
            return Err(Error::InvalidField("username must not be empty".to_string()));
        }
        if password.is_empty() {
            return Err(Error::InvalidField("password must not be empty".to_string()));
        }
        if self.find_student(username).is_some() {
            return Err(Error::DuplicateStudent(username.to_string()));
        }

        let record = StudentRecord::new(username, password);
        self.students.push(record.clone());
        Ok(record)
    }

    pub fn save_grades(
        &mut self,
        username: &str,
        report: &GradeReport,
        graded_at: DateTime<Utc>,
    ) -> Result<StudentRecord> {
        let student = self
            .students
            .iter_mut()
            .find(|s| s.username == username)
            .ok_or_else(|| Error::StudentNotFound(username.to_string()))?;

        student.apply_report(report, graded_at);
        Ok(student.clone())
    }
}
