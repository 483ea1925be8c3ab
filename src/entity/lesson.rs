// src/entity/lesson.rs
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{optional_text, parse_enum, required_text, GradeLevel};
use crate::error::Result;

/// Raw body of a lesson note generation call, as sent by the dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LessonNotePayload {
    /// Subject name, e.g. "Mathematics"
    pub subject: Option<String>,
    /// One of JSS1, JSS2, JSS3, SS1, SS2, SS3
    pub grade_level: Option<String>,
    /// Lesson topic
    pub topic: Option<String>,
    /// Optional narrower focus within the topic
    pub subtopic: Option<String>,
}

impl LessonNotePayload {
    pub fn into_request(self) -> Result<LessonNoteRequest> {
        let subject = required_text("subject", self.subject)?;
        let grade_raw = required_text("gradeLevel", self.grade_level)?;
        let topic = required_text("topic", self.topic)?;

        Ok(LessonNoteRequest {
            subject,
            grade_level: parse_enum("gradeLevel", &grade_raw, GradeLevel::VALID)?,
            topic,
            subtopic: optional_text(self.subtopic),
        })
    }
}

/// Validated lesson note request. Required text fields are trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonNoteRequest {
    pub subject: String,
    pub grade_level: GradeLevel,
    pub topic: String,
    pub subtopic: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonNoteDocument {
    pub title: String,
    pub objectives: Vec<String>,
    pub introduction: String,
    pub content: String,
    pub evaluation: String,
    pub conclusion: String,
}

/// A lesson note in the shape the dashboard stores it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonNoteRecord {
    pub id: Uuid,
    pub teacher_id: Uuid,
    pub title: String,
    pub subject: String,
    pub grade_level: GradeLevel,
    pub topic: String,
    pub subtopic: Option<String>,
    pub objectives: Vec<String>,
    pub introduction: String,
    pub content: String,
    pub evaluation: String,
    pub conclusion: String,
    pub ai_generated: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LessonNoteRecord {
    pub fn new(teacher_id: Uuid, request: &LessonNoteRequest, note: LessonNoteDocument) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            teacher_id,
            title: note.title,
            subject: request.subject.clone(),
            grade_level: request.grade_level,
            topic: request.topic.clone(),
            subtopic: request.subtopic.clone(),
            objectives: note.objectives,
            introduction: note.introduction,
            content: note.content,
            evaluation: note.evaluation,
            conclusion: note.conclusion,
            ai_generated: true,
            created_at: now,
            updated_at: now,
        }
    }
}
