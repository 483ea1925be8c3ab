mod lesson;
mod question;
mod tutor;

pub use lesson::{LessonNoteDocument, LessonNotePayload, LessonNoteRecord, LessonNoteRequest};
pub use question::{
    CountValue, QuestionItem, QuestionOption, QuestionPayload, QuestionRecord, QuestionRequest,
    QuestionsResponse,
};
pub use tutor::{TutorPayload, TutorReply, TutorRequest};

use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{EduforgeError, Result};

/// School grade levels offered by the dashboard (junior and senior secondary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum GradeLevel {
    #[serde(rename = "JSS1")]
    Jss1,
    #[serde(rename = "JSS2")]
    Jss2,
    #[serde(rename = "JSS3")]
    Jss3,
    #[serde(rename = "SS1")]
    Ss1,
    #[serde(rename = "SS2")]
    Ss2,
    #[serde(rename = "SS3")]
    Ss3,
}

impl GradeLevel {
    pub const VALID: &'static [&'static str] = &["JSS1", "JSS2", "JSS3", "SS1", "SS2", "SS3"];
}

impl std::fmt::Display for GradeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GradeLevel::Jss1 => write!(f, "JSS1"),
            GradeLevel::Jss2 => write!(f, "JSS2"),
            GradeLevel::Jss3 => write!(f, "JSS3"),
            GradeLevel::Ss1 => write!(f, "SS1"),
            GradeLevel::Ss2 => write!(f, "SS2"),
            GradeLevel::Ss3 => write!(f, "SS3"),
        }
    }
}

impl FromStr for GradeLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "JSS1" => Ok(GradeLevel::Jss1),
            "JSS2" => Ok(GradeLevel::Jss2),
            "JSS3" => Ok(GradeLevel::Jss3),
            "SS1" => Ok(GradeLevel::Ss1),
            "SS2" => Ok(GradeLevel::Ss2),
            "SS3" => Ok(GradeLevel::Ss3),
            _ => Err(format!("Invalid grade level: {}", s)),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const VALID: &'static [&'static str] = &["easy", "medium", "hard"];
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!("Invalid difficulty: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    #[default]
    MultipleChoice,
    ShortAnswer,
    Essay,
}

impl QuestionType {
    pub const VALID: &'static [&'static str] = &["multiple_choice", "short_answer", "essay"];
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestionType::MultipleChoice => write!(f, "multiple_choice"),
            QuestionType::ShortAnswer => write!(f, "short_answer"),
            QuestionType::Essay => write!(f, "essay"),
        }
    }
}

impl FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "multiple_choice" | "mcq" => Ok(QuestionType::MultipleChoice),
            "short_answer" => Ok(QuestionType::ShortAnswer),
            "essay" => Ok(QuestionType::Essay),
            _ => Err(format!("Invalid question type: {}", s)),
        }
    }
}

/// Trim a required text field, rejecting absent or blank values.
pub(crate) fn required_text(field: &'static str, value: Option<String>) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(EduforgeError::MissingField(field)),
    }
}

/// Trim an optional text field; blank counts as absent.
pub(crate) fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse an enum field, mapping failures to a field-aware validation error.
pub(crate) fn parse_enum<T: FromStr>(
    field: &'static str,
    value: &str,
    valid: &[&str],
) -> Result<T> {
    value.parse().map_err(|_| EduforgeError::InvalidEnumValue {
        field,
        value: value.to_string(),
        valid: valid.iter().map(|v| v.to_string()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_level_round_trips_through_display() {
        for raw in GradeLevel::VALID {
            let grade: GradeLevel = raw.parse().unwrap();
            assert_eq!(grade.to_string(), *raw);
        }
        assert_eq!("ss2".parse::<GradeLevel>(), Ok(GradeLevel::Ss2));
        assert!("SS4".parse::<GradeLevel>().is_err());
    }

    #[test]
    fn test_grade_level_serializes_as_label() {
        let json = serde_json::to_string(&GradeLevel::Jss3).unwrap();
        assert_eq!(json, "\"JSS3\"");
    }

    #[test]
    fn test_question_type_accepts_dashes() {
        assert_eq!(
            "short-answer".parse::<QuestionType>(),
            Ok(QuestionType::ShortAnswer)
        );
        assert!("true_false".parse::<QuestionType>().is_err());
    }

    #[test]
    fn test_required_text_rejects_blank() {
        assert!(matches!(
            required_text("topic", Some("   ".into())),
            Err(EduforgeError::MissingField("topic"))
        ));
        assert!(matches!(
            required_text("topic", None),
            Err(EduforgeError::MissingField("topic"))
        ));
        assert_eq!(required_text("topic", Some(" Algebra ".into())).unwrap(), "Algebra");
    }

    #[test]
    fn test_parse_enum_reports_field() {
        let err = parse_enum::<Difficulty>("difficulty", "extreme", Difficulty::VALID).unwrap_err();
        assert!(err.to_string().contains("'difficulty'"));
        assert!(err.to_string().contains("easy, medium, hard"));
    }
}
