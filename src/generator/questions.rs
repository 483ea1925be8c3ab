// src/generator/questions.rs
use tracing::debug;

use super::fill;
use super::pools::{pool_for, written_pool};
use crate::entity::{Difficulty, QuestionItem, QuestionOption, QuestionRequest, QuestionType};

const OPTION_LABELS: [&str; 4] = ["A", "B", "C", "D"];

/// Every multiple-choice item names option A as correct, whatever the
/// template's wording. Callers reviewing questions must check this by hand.
const MC_CORRECT_ANSWER: &str = "A";

fn difficulty_note(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "This is a basic concept.",
        Difficulty::Medium => "This requires understanding of key principles.",
        Difficulty::Hard => "This demands critical thinking and deep analysis.",
    }
}

/// Generate exactly `request.count` questions.
///
/// Item `i` uses template `i % pool.len()`, so larger counts repeat the pool
/// round-robin. Item numbering in the question text is 1-based.
pub fn generate_questions(request: &QuestionRequest) -> Vec<QuestionItem> {
    let vars = [
        ("topic", request.topic.as_str()),
        ("subject", request.subject.as_str()),
    ];

    let items: Vec<QuestionItem> = match request.question_type {
        QuestionType::MultipleChoice => {
            let pool = pool_for(&request.subject);
            let templates = pool.templates(request.difficulty);
            debug!(
                pool = pool.subject,
                templates = templates.len(),
                difficulty = %request.difficulty,
                "selected multiple-choice pool"
            );

            (0..request.count)
                .map(|i| {
                    let template = &templates[i % templates.len()];
                    let options = OPTION_LABELS
                        .iter()
                        .zip(template.options.iter())
                        .map(|(label, value)| QuestionOption {
                            label: label.to_string(),
                            value: fill(value, &vars),
                        })
                        .collect();

                    QuestionItem {
                        question_text: format!("Question {}: {}", i + 1, fill(template.stem, &vars)),
                        question_type: QuestionType::MultipleChoice,
                        difficulty: request.difficulty,
                        options: Some(options),
                        correct_answer: MC_CORRECT_ANSWER.to_string(),
                        explanation: format!(
                            "{} {}",
                            fill(template.explanation, &vars),
                            difficulty_note(request.difficulty)
                        ),
                    }
                })
                .collect()
        }
        QuestionType::ShortAnswer | QuestionType::Essay => {
            let prompts = written_pool(request.question_type == QuestionType::Essay);

            (0..request.count)
                .map(|i| {
                    let template = &prompts[i % prompts.len()];
                    QuestionItem {
                        question_text: format!("Question {}: {}", i + 1, fill(template.prompt, &vars)),
                        question_type: request.question_type,
                        difficulty: request.difficulty,
                        options: None,
                        correct_answer: fill(template.model_answer, &vars),
                        explanation: fill(template.explanation, &vars),
                    }
                })
                .collect()
        }
    };

    debug!(
        subject = %request.subject,
        topic = %request.topic,
        question_type = %request.question_type,
        count = items.len(),
        "generated questions"
    );

    items
}
