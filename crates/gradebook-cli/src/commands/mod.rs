//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod add_student;
pub mod grade;
pub mod init;
pub mod list;
pub mod serve;
