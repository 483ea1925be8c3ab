use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::ApiError;
use super::AppState;
use crate::entity::{
    LessonNoteDocument, LessonNotePayload, QuestionPayload, QuestionsResponse, TutorPayload,
    TutorReply,
};
use crate::error::Result;
use crate::generator::{generate_lesson_note, generate_questions, respond};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Bodies are parsed as JSON whatever their content type.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T> {
    Ok(serde_json::from_slice(body)?)
}

pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn lesson_note(body: Bytes) -> std::result::Result<Json<LessonNoteDocument>, ApiError> {
    let request = parse_body::<LessonNotePayload>(&body)?.into_request()?;
    let note = generate_lesson_note(&request);
    info!(subject = %request.subject, topic = %request.topic, "lesson note generated");
    Ok(Json(note))
}

pub async fn questions(
    State(state): State<AppState>,
    body: Bytes,
) -> std::result::Result<Json<QuestionsResponse>, ApiError> {
    let request = parse_body::<QuestionPayload>(&body)?.into_request(&state.limits)?;
    let questions = generate_questions(&request);
    info!(
        subject = %request.subject,
        topic = %request.topic,
        count = questions.len(),
        "questions generated"
    );
    Ok(Json(QuestionsResponse { questions }))
}

pub async fn tutor(body: Bytes) -> std::result::Result<Json<TutorReply>, ApiError> {
    let request = parse_body::<TutorPayload>(&body)?.into_request()?;
    Ok(Json(respond(&request)))
}
