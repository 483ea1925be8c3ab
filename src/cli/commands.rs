use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "eduforge")]
#[command(version, about = "Template-driven lesson note and quiz question generator")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP generation service
    Serve {
        /// YAML config file
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Address to listen on, e.g. 0.0.0.0:8787
        #[arg(long)]
        bind: Option<String>,

        /// Value for Access-Control-Allow-Origin
        #[arg(long)]
        allow_origin: Option<String>,

        /// Largest question count accepted per request (1-20)
        #[arg(long)]
        max_questions: Option<usize>,
    },

    /// Generate a lesson note
    Lesson {
        /// Subject, e.g. "Mathematics"
        #[arg(long)]
        subject: String,

        /// Grade level (JSS1, JSS2, JSS3, SS1, SS2, SS3)
        #[arg(long)]
        grade: String,

        /// Lesson topic
        #[arg(long)]
        topic: String,

        /// Optional subtopic
        #[arg(long)]
        subtopic: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Write the text rendering to <topic>_lesson_note.txt in the current directory
        #[arg(long)]
        save: bool,

        /// Emit a storable record owned by this teacher id (JSON only)
        #[arg(long)]
        owner: Option<String>,
    },

    /// Generate quiz questions
    Questions {
        /// Subject; subjects without dedicated templates use the default pool
        #[arg(long)]
        subject: String,

        /// Topic
        #[arg(long)]
        topic: String,

        /// Difficulty (easy, medium, hard)
        #[arg(long)]
        difficulty: Option<String>,

        /// Question type (multiple_choice, short_answer, essay)
        #[arg(long = "type")]
        question_type: Option<String>,

        /// Number of questions (1-20, default 5)
        #[arg(long)]
        count: Option<i64>,

        /// Emit storable records owned by this teacher id
        #[arg(long)]
        owner: Option<String>,
    },

    /// Ask the study tutor a question
    Tutor {
        /// The question
        message: String,

        /// Topic the question is about
        #[arg(long)]
        topic: Option<String>,
    },

    /// Print the JSON Schema of a request body
    Schema {
        #[arg(value_enum)]
        target: SchemaTarget,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SchemaTarget {
    Lesson,
    Questions,
    Tutor,
}
