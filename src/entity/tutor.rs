// src/entity/tutor.rs
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{optional_text, required_text};
use crate::error::Result;

/// Raw body of a study tutor call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct TutorPayload {
    /// The student's question
    pub message: Option<String>,
    /// Optional topic the question is about
    pub topic: Option<String>,
}

impl TutorPayload {
    pub fn into_request(self) -> Result<TutorRequest> {
        Ok(TutorRequest {
            message: required_text("message", self.message)?,
            topic: optional_text(self.topic),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorRequest {
    pub message: String,
    pub topic: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorReply {
    pub response: String,
    pub topic: String,
}
