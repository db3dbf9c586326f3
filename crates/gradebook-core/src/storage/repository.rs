use chrono::Utc;

use crate::error::Result;
use crate::score::GradeReport;
use crate::storage::{Role, StoreData, StudentRecord};

/// Access to admin credentials and student records.
pub trait StudentRepository {
    fn authenticate(&self, username: &str, password: &str) -> Result<Option<Role>>;

    fn find_by_username(&self, username: &str) -> Result<Option<StudentRecord>>;

    /// Students in creation order
    fn list_students(&self) -> Result<Vec<StudentRecord>>;

    fn create_student(&mut self, username: &str, password: &str) -> Result<StudentRecord>;

    /// Attach a grade report to a student, replacing earlier grades
    fn save_grades(&mut self, username: &str, report: &GradeReport) -> Result<StudentRecord>;
}

/// In-memory repository, used for tests and dry runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: StoreData,
}

impl MemoryStore {
    pub fn new(data: StoreData) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &StoreData {
        &self.data
    }
}

impl StudentRepository for MemoryStore {
    fn authenticate(&self, username: &str, password: &str) -> Result<Option<Role>> {
        Ok(self.data.authenticate(username, password))
    }

    fn find_by_username(&self, username: &str) -> Result<Option<StudentRecord>> {
        Ok(self.data.find_student(username).cloned())
    }

    fn list_students(&self) -> Result<Vec<StudentRecord>> {
        Ok(self.data.students.clone())
    }

    fn create_student(&mut self, username: &str, password: &str) -> Result<StudentRecord> {
        self.data.create_student(username, password)
    }

    fn save_grades(&mut self, username: &str, report: &GradeReport) -> Result<StudentRecord> {
        self.data.save_grades(username, report, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DefaultAdmin;
    use crate::score::{Grade, compute_grades};

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new(StoreData::with_admin(&DefaultAdmin::default()));

        store.create_student("alice", "pw").unwrap();
        assert_eq!(store.authenticate("alice", "pw").unwrap(), Some(Role::Student));

        let report = compute_grades(&[90.0, 80.0, 70.0, 60.0, 50.0, 40.0]).unwrap();
        store.save_grades("alice", &report).unwrap();

        let record = store.find_by_username("alice").unwrap().unwrap();
        assert_eq!(record.overall, Some(Grade::C));
        assert!(record.graded_at.is_some());
        assert_eq!(store.list_students().unwrap().len(), 1);
        assert!(store.find_by_username("bob").unwrap().is_none());
    }
}
