use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use uuid::Uuid;

use super::commands::{OutputFormat, SchemaTarget};
use crate::config::{QuestionLimits, ServerConfig};
use crate::entity::{
    CountValue, LessonNotePayload, LessonNoteRecord, QuestionPayload, QuestionRecord,
    QuestionsResponse, TutorPayload,
};
use crate::error::{EduforgeError, Result};
use crate::generator::export::{lesson_note_filename, lesson_note_text};
use crate::generator::{generate_lesson_note, generate_questions, respond};
use crate::http;

fn parse_owner(owner: Option<String>) -> Result<Option<Uuid>> {
    owner
        .map(|raw| Uuid::parse_str(raw.trim()).map_err(|_| EduforgeError::InvalidOwner(raw)))
        .transpose()
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn handle_serve(
    config_path: Option<PathBuf>,
    bind: Option<String>,
    allow_origin: Option<String>,
    max_questions: Option<usize>,
) -> Result<()> {
    let mut config = match &config_path {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = bind {
        config.bind = bind;
    }
    if let Some(origin) = allow_origin {
        config.allow_origin = origin;
    }
    if let Some(max) = max_questions {
        config.max_questions = max;
        config.default_question_count = config.default_question_count.min(max);
    }
    config.validate()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let shutdown = CancellationToken::new();
        let signal_token = shutdown.clone();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("shutdown requested"),
                Err(e) => warn!(error = %e, "could not listen for ctrl-c"),
            }
            signal_token.cancel();
        });

        http::serve(&config, shutdown).await
    })
}

pub fn handle_lesson(
    subject: String,
    grade: String,
    topic: String,
    subtopic: Option<String>,
    format: OutputFormat,
    save: bool,
    owner: Option<String>,
) -> Result<()> {
    let owner = parse_owner(owner)?;
    if format == OutputFormat::Text && owner.is_some() {
        return Err(EduforgeError::Config(
            "--owner requires --format json".to_string(),
        ));
    }
    let request = LessonNotePayload {
        subject: Some(subject),
        grade_level: Some(grade),
        topic: Some(topic),
        subtopic,
    }
    .into_request()?;

    let note = generate_lesson_note(&request);

    if save {
        let filename = lesson_note_filename(&request.topic);
        fs::write(&filename, lesson_note_text(&request, &note))?;
        eprintln!("Saved {}", filename);
    }

    match (format, owner) {
        (OutputFormat::Text, _) => {
            print!("{}", lesson_note_text(&request, &note));
            Ok(())
        }
        (OutputFormat::Json, Some(teacher_id)) => {
            print_json(&LessonNoteRecord::new(teacher_id, &request, note))
        }
        (OutputFormat::Json, None) => print_json(&note),
    }
}

pub fn handle_questions(
    subject: String,
    topic: String,
    difficulty: Option<String>,
    question_type: Option<String>,
    count: Option<i64>,
    owner: Option<String>,
) -> Result<()> {
    let owner = parse_owner(owner)?;
    let request = QuestionPayload {
        subject: Some(subject),
        topic: Some(topic),
        difficulty,
        count: count.map(CountValue::Number),
        question_type,
    }
    .into_request(&QuestionLimits::default())?;

    let questions = generate_questions(&request);

    match owner {
        Some(teacher_id) => {
            let records: Vec<QuestionRecord> = questions
                .into_iter()
                .map(|q| QuestionRecord::new(teacher_id, &request, q))
                .collect();
            print_json(&records)
        }
        None => print_json(&QuestionsResponse { questions }),
    }
}

pub fn handle_tutor(message: String, topic: Option<String>) -> Result<()> {
    let request = TutorPayload {
        message: Some(message),
        topic,
    }
    .into_request()?;

    let reply = respond(&request);
    println!("{}", reply.response);
    Ok(())
}

pub fn handle_schema(target: SchemaTarget) -> Result<()> {
    let schema = match target {
        SchemaTarget::Lesson => schemars::schema_for!(LessonNotePayload),
        SchemaTarget::Questions => schemars::schema_for!(QuestionPayload),
        SchemaTarget::Tutor => schemars::schema_for!(TutorPayload),
    };
    print_json(&schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_owner() {
        let id = Uuid::new_v4();
        assert_eq!(parse_owner(Some(id.to_string())).unwrap(), Some(id));
        assert_eq!(parse_owner(None).unwrap(), None);
        assert!(matches!(
            parse_owner(Some("teacher-1".into())),
            Err(EduforgeError::InvalidOwner(_))
        ));
    }
}
