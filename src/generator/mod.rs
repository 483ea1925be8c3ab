//! Template-driven content generation.
//!
//! Every generator here is a pure function of its request: the same input
//! always yields the same output. Nothing is inferred; text comes from fixed
//! templates with `{{variable}}` placeholders.

pub mod export;
mod lesson;
mod pools;
mod questions;
mod tutor;

pub use lesson::generate_lesson_note;
pub use questions::generate_questions;
pub use tutor::{classify, respond, TutorIntent};

/// Substitute `{{name}}` placeholders in `template`.
///
/// Rendering is a single left-to-right pass: substituted values are copied
/// verbatim and never scanned for placeholders themselves. Placeholders with
/// no matching variable are left as-is.
pub fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            rest = &rest[start..];
            break;
        };
        let name = &after[..end];
        match vars.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push_str("{{");
                out.push_str(name);
                out.push_str("}}");
            }
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}
