mod commands;
mod handlers;

pub use commands::{Cli, Commands, OutputFormat, SchemaTarget};
pub use handlers::{handle_lesson, handle_questions, handle_schema, handle_serve, handle_tutor};
