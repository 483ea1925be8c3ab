pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod generator;
pub mod http;

pub use config::ServerConfig;
pub use error::{EduforgeError, Result};
pub use generator::{generate_lesson_note, generate_questions};
