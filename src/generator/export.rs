// src/generator/export.rs
//! Plain-text rendering of lesson notes for download.

use crate::entity::{LessonNoteDocument, LessonNoteRequest};

/// Render a lesson note as a plain-text document.
pub fn lesson_note_text(request: &LessonNoteRequest, note: &LessonNoteDocument) -> String {
    let mut out = String::new();
    out.push_str("LESSON NOTE\n\n");
    out.push_str(&format!("Title: {}\n", note.title));
    out.push_str(&format!("Subject: {}\n", request.subject));
    out.push_str(&format!("Grade Level: {}\n", request.grade_level));
    out.push_str(&format!("Topic: {}\n", request.topic));
    if let Some(subtopic) = &request.subtopic {
        out.push_str(&format!("Subtopic: {}\n", subtopic));
    }

    out.push_str("\nOBJECTIVES:\n");
    for (i, objective) in note.objectives.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, objective));
    }

    for (heading, body) in [
        ("INTRODUCTION", &note.introduction),
        ("CONTENT", &note.content),
        ("EVALUATION", &note.evaluation),
        ("CONCLUSION", &note.conclusion),
    ] {
        out.push_str(&format!("\n{}:\n{}\n", heading, body));
    }

    out
}

/// Characters that are path separators or reserved in file names on common
/// platforms.
const RESERVED_FILENAME_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Download filename: whitespace runs in the topic become `_`, as do reserved
/// characters and control characters. The result is always a single path
/// component inside the current directory.
pub fn lesson_note_filename(topic: &str) -> String {
    let stem = topic
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .map(|c| {
            if c.is_control() || RESERVED_FILENAME_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect::<String>();
    let stem = stem.trim_start_matches('.');
    let stem = if stem.trim_matches('_').is_empty() {
        "lesson"
    } else {
        stem
    };
    format!("{}_lesson_note.txt", stem)
}
