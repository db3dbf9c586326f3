//! Serve command: run the web application.

use anyhow::Result;
use gradebook_core::Config;
use gradebook_web::AppState;
use tracing::info;

use crate::cli_utils;

pub async fn run(config: &Config, bind: Option<&str>) -> Result<()> {
    let store = cli_utils::open_store(config);
    store.init()?;
    info!("Using data file {:?}", store.path());

    let bind = bind.unwrap_or(&config.bind);
    let state = AppState::new(store, &config.session_cookie);
    gradebook_web::serve(state, bind).await
}
