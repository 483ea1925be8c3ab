// src/entity/question.rs
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{parse_enum, required_text, Difficulty, QuestionType};
use crate::config::QuestionLimits;
use crate::error::{EduforgeError, Result};

/// Question count as sent by clients: form inputs post it as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum CountValue {
    Number(i64),
    Text(String),
}

impl CountValue {
    fn to_i64(&self) -> Result<i64> {
        match self {
            CountValue::Number(n) => Ok(*n),
            CountValue::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| EduforgeError::InvalidCount(s.clone())),
        }
    }
}

/// Raw body of a question generation call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPayload {
    /// Subject name; subjects without dedicated templates use the default pool
    pub subject: Option<String>,
    /// Topic substituted into every question
    pub topic: Option<String>,
    /// easy, medium or hard (default easy)
    pub difficulty: Option<String>,
    /// Number of questions to generate (default from server config)
    pub count: Option<CountValue>,
    /// multiple_choice, short_answer or essay (default multiple_choice)
    pub question_type: Option<String>,
}

impl QuestionPayload {
    pub fn into_request(self, limits: &QuestionLimits) -> Result<QuestionRequest> {
        let subject = required_text("subject", self.subject)?;
        let topic = required_text("topic", self.topic)?;

        let difficulty = match self.difficulty.as_deref().map(str::trim) {
            None | Some("") => Difficulty::default(),
            Some(raw) => parse_enum("difficulty", raw, Difficulty::VALID)?,
        };

        let question_type = match self.question_type.as_deref().map(str::trim) {
            None | Some("") => QuestionType::default(),
            Some(raw) => parse_enum("questionType", raw, QuestionType::VALID)?,
        };

        let count = match &self.count {
            None => limits.default_count,
            Some(CountValue::Text(s)) if s.trim().is_empty() => limits.default_count,
            Some(value) => limits.check(value.to_i64()?)?,
        };

        Ok(QuestionRequest {
            subject,
            topic,
            difficulty,
            question_type,
            count,
        })
    }
}

/// Validated question request; `count` is within the configured bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRequest {
    pub subject: String,
    pub topic: String,
    pub difficulty: Difficulty,
    pub question_type: QuestionType,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionItem {
    pub question_text: String,
    pub question_type: QuestionType,
    pub difficulty: Difficulty,
    pub options: Option<Vec<QuestionOption>>,
    pub correct_answer: String,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionsResponse {
    pub questions: Vec<QuestionItem>,
}

/// A generated question in the shape the dashboard stores it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: Uuid,
    pub teacher_id: Uuid,
    pub lesson_id: Option<Uuid>,
    pub question_text: String,
    pub question_type: QuestionType,
    pub subject: String,
    pub topic: String,
    pub difficulty: Difficulty,
    pub options: Option<Vec<QuestionOption>>,
    pub correct_answer: String,
    pub explanation: Option<String>,
    pub ai_generated: bool,
    pub created_at: DateTime<Utc>,
}

impl QuestionRecord {
    pub fn new(teacher_id: Uuid, request: &QuestionRequest, item: QuestionItem) -> Self {
        Self {
            id: Uuid::new_v4(),
            teacher_id,
            lesson_id: None,
            question_text: item.question_text,
            question_type: item.question_type,
            subject: request.subject.clone(),
            topic: request.topic.clone(),
            difficulty: item.difficulty,
            options: item.options,
            correct_answer: item.correct_answer,
            explanation: Some(item.explanation),
            ai_generated: true,
            created_at: Utc::now(),
        }
    }
}
