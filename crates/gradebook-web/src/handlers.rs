use axum::Form;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::http::header::SET_COOKIE;
use axum::response::{Html, IntoResponse, Redirect, Response};
use gradebook_core::{Role, SUBJECT_COUNT, StudentRepository, compute_grades};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{info, warn};

use crate::AppState;
use crate::error::WebError;
use crate::session::{
    AdminSession, StudentSession, expired_cookie, session_cookie, token_from_headers,
};
use crate::views;

#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

pub async fn login_page() -> Html<String> {
    Html(views::login(None))
}

pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<Credentials>,
) -> Result<Response, WebError> {
    let role = state
        .store
        .lock()
        .await
        .authenticate(&form.username, &form.password)?;

    let Some(role) = role else {
        warn!("Failed login for {}", form.username);
        return Ok(Html(views::login(Some("Invalid credentials"))).into_response());
    };

    // Logging in again replaces the session the browser already holds
    if let Some(previous) = token_from_headers(&headers, &state.cookie_name) {
        state.sessions.remove(&previous).await;
    }
    let token = state.sessions.create(role, &form.username).await;
    info!("{} logged in as {:?}", form.username, role);

    let target = match role {
        Role::Admin => "/admin",
        Role::Student => "/student",
    };
    Ok((
        [(SET_COOKIE, session_cookie(&state.cookie_name, &token))],
        Redirect::to(target),
    )
        .into_response())
}

pub async fn admin_dashboard(
    State(state): State<AppState>,
    _admin: AdminSession,
) -> Result<Html<String>, WebError> {
    let students = state.store.lock().await.list_students()?;
    Ok(Html(views::admin_dashboard(&students, None)))
}

pub async fn create_user(
    State(state): State<AppState>,
    _admin: AdminSession,
    Form(form): Form<Credentials>,
) -> Result<Response, WebError> {
    let mut store = state.store.lock().await;
    match store.create_student(form.username.trim(), &form.password) {
        Ok(_) => Ok(Redirect::to("/admin").into_response()),
        Err(e) if e.is_input_error() => {
            warn!("Rejected new student {}: {}", form.username, e);
            let students = store.list_students()?;
            let html = views::admin_dashboard(&students, Some(&e.to_string()));
            Ok((StatusCode::BAD_REQUEST, Html(html)).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn student_dashboard(_student: StudentSession) -> Html<String> {
    Html(views::student_dashboard())
}

/// Read `subject1`..`subject6` from the submitted form
pub fn parse_scores(form: &HashMap<String, String>) -> Result<Vec<f64>, WebError> {
    let mut scores = Vec::with_capacity(SUBJECT_COUNT);
    for i in 1..=SUBJECT_COUNT {
        let raw = form
            .get(&format!("subject{}", i))
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| WebError::BadRequest("Please fill in all scores".to_string()))?;
        let score = raw.parse::<f64>().map_err(|_| {
            WebError::BadRequest(format!("Invalid score for Subject {}: {}", i, raw))
        })?;
        scores.push(score);
    }
    Ok(scores)
}

pub async fn calculate(
    State(state): State<AppState>,
    StudentSession(session): StudentSession,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Html<String>, WebError> {
    let scores = parse_scores(&form)?;
    let report = compute_grades(&scores)?;

    let student = state
        .store
        .lock()
        .await
        .save_grades(&session.username, &report)?;

    Ok(Html(views::grade_report(&student)))
}

pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(token) = token_from_headers(&headers, &state.cookie_name)
        && let Some(session) = state.sessions.remove(&token).await
    {
        info!("{} logged out", session.username);
    }
    (
        [(SET_COOKIE, expired_cookie(&state.cookie_name))],
        Redirect::to("/"),
    )
        .into_response()
}
