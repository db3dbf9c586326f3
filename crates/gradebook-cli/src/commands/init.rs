//! Init command: create the data file.

use anyhow::Result;
use gradebook_core::Config;

use crate::cli_utils;

pub fn run(config: &Config) -> Result<()> {
    let store = cli_utils::open_store(config);
    if store.init()? {
        println!("Created {}", store.path().display());
    } else {
        println!("{} already exists", store.path().display());
    }
    Ok(())
}
