//! Add-student command.

use anyhow::Result;
use gradebook_core::{Config, StudentRepository};

use crate::cli_utils;

pub fn run(config: &Config, username: &str, password: &str) -> Result<()> {
    let mut store = cli_utils::open_store(config);
    let record = store.create_student(username.trim(), password)?;
    println!(
        "Created student {} in {}",
        record.username,
        store.path().display()
    );
    Ok(())
}
