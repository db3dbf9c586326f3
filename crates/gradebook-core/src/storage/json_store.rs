use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::DefaultAdmin;
use crate::error::Result;
use crate::score::GradeReport;
use crate::storage::{Role, StoreData, StudentRecord, StudentRepository};

/// Record store backed by a single JSON file.
///
/// Every call re-reads the file, so edits made by another process between
/// calls are picked up. A missing file reads as a store holding only the
/// default admin.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
    default_admin: DefaultAdmin,
}

impl JsonStore {
    pub fn new<P: AsRef<Path>>(path: P, default_admin: DefaultAdmin) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            default_admin,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the data file if it does not exist yet.
    /// Returns whether a new file was written.
    pub fn init(&self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        self.save(&StoreData::with_admin(&self.default_admin))?;
        info!("Initialized data file at {:?}", self.path);
        Ok(true)
    }

    pub fn load(&self) -> Result<StoreData> {
        if !self.path.exists() {
            return Ok(StoreData::with_admin(&self.default_admin));
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Write the store as JSON indented by four spaces, creating the parent
    /// directory if needed
    pub fn save(&self, data: &StoreData) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        data.serialize(&mut ser)?;
        fs::write(&self.path, buf)?;
        Ok(())
    }
}

impl StudentRepository for JsonStore {
    fn authenticate(&self, username: &str, password: &str) -> Result<Option<Role>> {
        Ok(self.load()?.authenticate(username, password))
    }

    fn find_by_username(&self, username: &str) -> Result<Option<StudentRecord>> {
        Ok(self.load()?.find_student(username).cloned())
    }

    fn list_students(&self) -> Result<Vec<StudentRecord>> {
        Ok(self.load()?.students)
    }

    fn create_student(&mut self, username: &str, password: &str) -> Result<StudentRecord> {
        let mut data = self.load()?;
        let record = data.create_student(username, password)?;
        self.save(&data)?;
        info!("Created student {}", record.username);
        Ok(record)
    }

    fn save_grades(&mut self, username: &str, report: &GradeReport) -> Result<StudentRecord> {
        let mut data = self.load()?;
        let record = data.save_grades(username, report, Utc::now())?;
        self.save(&data)?;
        info!(
            "Saved grades for {} (overall {})",
            record.username, report.overall.grade
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonStore {
        JsonStore::new(dir.path().join("data/students.json"), DefaultAdmin::default())
    }

    #[test]
    fn test_load_missing_file_returns_default_admin() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        let data = store.load().unwrap();
        assert_eq!(data.admins.len(), 1);
        assert_eq!(data.admins[0].username, "admin");
        assert!(data.students.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_init_creates_file_once() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store_in(&temp_dir);

        assert!(store.init().unwrap());
        assert!(store.path().exists());

        store.create_student("alice", "pw").unwrap();
        assert!(!store.init().unwrap());
        assert_eq!(store.list_students().unwrap().len(), 1);
    }

    #[test]
    fn test_save_uses_four_space_indent() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        store.init().unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.starts_with("{\n    \"admins\": [\n        {"));
    }

    #[test]
    fn test_create_student_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = store_in(&temp_dir);

        store.create_student("alice", "pw").unwrap();

        let data = store.load().unwrap();
        assert_eq!(data.admins.len(), 1);
        assert_eq!(data.students[0].username, "alice");
    }

    #[test]
    fn test_load_rejects_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("students.json");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonStore::new(&path, DefaultAdmin::default());
        assert!(matches!(store.load(), Err(Error::Json(_))));
    }
}
