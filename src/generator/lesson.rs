// src/generator/lesson.rs
use tracing::debug;

use super::fill;
use crate::entity::{LessonNoteDocument, LessonNoteRequest};

const OBJECTIVES: [&str; 4] = [
    "Understand the key concepts of {{topic}}",
    "Identify and explain the main components of {{topic}}",
    "Apply knowledge of {{topic}} to solve practical problems",
    "Analyze the significance and applications of {{topic}}",
];

const INTRODUCTION: &str = "This lesson introduces students to {{topic}}, a fundamental concept in \
{{subject}}. {{focus}}Understanding {{topic}} is essential for {{grade}} students as it forms the \
foundation for more advanced studies in {{subject}}.\n\nBy the end of this lesson, students will \
have a comprehensive understanding of the key principles and practical applications of {{topic}}.";

const INTRODUCTION_FOCUS: &str = "We will focus specifically on {{subtopic}}. ";

const CONTENT: &str = "**Overview**\n\n{{topic}} is a crucial area of study in {{subject}} that \
helps students develop critical thinking and analytical skills. Let's explore this topic in \
detail.\n\n**Key Concepts**\n\n1. **Definition and Importance**: {{topic}} refers to the study and \
understanding of specific principles and relationships within {{subject}}. It is important \
because it helps us comprehend how different elements interact and influence outcomes.\n\n\
2. **Main Components**: The topic consists of several interconnected parts that work together. \
Understanding each component individually helps build a complete picture of the subject \
matter.\n\n3. **Practical Applications**: {{topic}} has real-world applications in various \
fields. Students encounter these concepts in everyday situations, making the learning relevant \
and engaging.\n\n4. **Examples and Illustrations**: Through carefully selected examples, we can \
see how {{topic}} manifests in different contexts. These examples help solidify understanding \
and demonstrate the practical value of theoretical knowledge.\n\n**Detailed Explanation**\n\n\
For {{grade}} students, it's essential to approach {{topic}} systematically. Start by identifying \
the fundamental principles, then build upon them with more complex ideas. {{focus}}\n\nThe \
relationship between different elements of {{topic}} demonstrates how knowledge in {{subject}} \
is interconnected. This interconnectedness is what makes {{subject}} both challenging and \
rewarding to study.";

const CONTENT_FOCUS: &str =
    "Focusing on {{subtopic}} allows us to examine specific aspects in greater depth. ";

const EVALUATION: &str = "**Assessment Questions**\n\n1. Define {{topic}} in your own words and \
explain its significance in {{subject}}.\n\n2. List and explain three key components or \
principles of {{topic}}.\n\n3. Provide at least two practical examples of how {{topic}} is \
applied in real-world situations.\n\n4. Compare and contrast different aspects of {{topic}}, \
highlighting similarities and differences.\n\n5. Critical thinking: How does understanding \
{{topic}} help you in other areas of {{subject}}?\n\n**Class Activity**\n\nStudents should work \
in small groups to discuss and present their understanding of {{topic}}. Each group will \
identify one unique application of the concept and share with the class.";

const CONCLUSION: &str = "In this lesson, we have explored {{topic}} in {{subject}} for {{grade}} \
students. We covered the fundamental concepts, key principles, and practical applications that \
make this topic essential for your educational journey.\n\nRemember that mastering {{topic}} \
requires practice and application. Continue to review the material, work through examples, and \
ask questions when concepts are unclear. {{focus}}\n\nAs you progress in your studies, the \
knowledge gained from understanding {{topic}} will serve as a foundation for more advanced \
concepts in {{subject}}. Keep practicing and stay curious!";

const CONCLUSION_FOCUS: &str = "Our focus on {{subtopic}} has provided deeper insight into \
specific aspects of the broader topic. ";

/// Compose a lesson note for a validated request.
pub fn generate_lesson_note(request: &LessonNoteRequest) -> LessonNoteDocument {
    let grade = request.grade_level.to_string();
    let subtopic = request.subtopic.as_deref();

    let section = |template: &str, focus_template: &str| {
        let focus = subtopic
            .map(|s| fill(focus_template, &[("subtopic", s)]))
            .unwrap_or_default();
        fill(
            template,
            &[
                ("topic", request.topic.as_str()),
                ("subject", request.subject.as_str()),
                ("grade", grade.as_str()),
                ("focus", focus.as_str()),
            ],
        )
    };

    let title = match subtopic {
        Some(s) => format!("{}: {}", request.topic, s),
        None => request.topic.clone(),
    };

    let objectives = OBJECTIVES
        .iter()
        .map(|t| fill(t, &[("topic", request.topic.as_str())]))
        .collect();

    debug!(
        subject = %request.subject,
        grade = %grade,
        topic = %request.topic,
        has_subtopic = subtopic.is_some(),
        "generated lesson note"
    );

    LessonNoteDocument {
        title,
        objectives,
        introduction: section(INTRODUCTION, INTRODUCTION_FOCUS),
        content: section(CONTENT, CONTENT_FOCUS),
        evaluation: section(EVALUATION, ""),
        conclusion: section(CONCLUSION, CONCLUSION_FOCUS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::GradeLevel;

    fn request(subtopic: Option<&str>) -> LessonNoteRequest {
        LessonNoteRequest {
            subject: "Mathematics".into(),
            grade_level: GradeLevel::Ss2,
            topic: "Quadratic Equations".into(),
            subtopic: subtopic.map(str::to_string),
        }
    }

    #[test]
    fn test_all_sections_present() {
        let note = generate_lesson_note(&request(None));
        assert_eq!(note.title, "Quadratic Equations");
        assert_eq!(note.objectives.len(), 4);
        for section in [
            &note.introduction,
            &note.content,
            &note.evaluation,
            &note.conclusion,
        ] {
            assert!(!section.is_empty());
            assert!(!section.contains("{{"), "unfilled placeholder in {section}");
        }
        assert!(note.objectives.iter().all(|o| o.contains("Quadratic Equations")));
    }

    #[test]
    fn test_grade_and_subject_substituted() {
        let note = generate_lesson_note(&request(None));
        assert!(note.introduction.contains("essential for SS2 students"));
        assert!(note.conclusion.contains("in Mathematics for SS2 students"));
    }

    #[test]
    fn test_subtopic_clauses() {
        let note = generate_lesson_note(&request(Some("Factorisation")));
        assert_eq!(note.title, "Quadratic Equations: Factorisation");
        assert!(note
            .introduction
            .contains("We will focus specifically on Factorisation. "));
        assert!(note.content.contains("Focusing on Factorisation allows us"));
        assert!(note.conclusion.contains("Our focus on Factorisation"));
        assert!(!note.evaluation.contains("Factorisation"));
    }

    #[test]
    fn test_no_subtopic_leaves_no_clause() {
        let note = generate_lesson_note(&request(None));
        assert!(!note.introduction.contains("focus specifically"));
        assert!(!note.content.contains("Focusing on"));
        assert!(!note.conclusion.contains("Our focus on"));
    }

    #[test]
    fn test_deterministic() {
        let r = request(Some("Roots"));
        assert_eq!(generate_lesson_note(&r), generate_lesson_note(&r));
    }
}
