//! # gradebook-web
//!
//! Browser front end for the gradebook: login, the admin dashboard for
//! creating students, and the student page for submitting scores.

pub mod error;
pub mod handlers;
pub mod session;
pub mod views;

use anyhow::Result;
use axum::Router;
use axum::routing::{get, post};
use gradebook_core::StudentRepository;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use error::WebError;
pub use session::{Session, SessionStore};

/// Record store shared by all requests. Holding the lock serializes every
/// read-modify-write of the underlying data.
pub type SharedStore = Arc<Mutex<Box<dyn StudentRepository + Send>>>;

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub sessions: SessionStore,
    pub cookie_name: Arc<str>,
}

impl AppState {
    pub fn new<R>(store: R, cookie_name: &str) -> Self
    where
        R: StudentRepository + Send + 'static,
    {
        let store: Box<dyn StudentRepository + Send> = Box::new(store);
        Self {
            store: Arc::new(Mutex::new(store)),
            sessions: SessionStore::new(),
            cookie_name: Arc::from(cookie_name),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::login_page).post(handlers::login))
        .route("/admin", get(handlers::admin_dashboard))
        .route("/create_user", post(handlers::create_user))
        .route("/student", get(handlers::student_dashboard))
        .route("/calculate", post(handlers::calculate))
        .route("/logout", get(handlers::logout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(state: AppState, bind: &str) -> Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("Gradebook listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
