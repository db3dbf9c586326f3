mod json_store;
mod record;
mod repository;

pub use json_store::JsonStore;
pub use record::*;
pub use repository::{MemoryStore, StudentRepository};
