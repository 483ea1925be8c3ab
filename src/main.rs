use clap::Parser;
use eduforge::cli::{
    handle_lesson, handle_questions, handle_schema, handle_serve, handle_tutor, Cli, Commands,
};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "eduforge=debug" } else { "eduforge=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Serve {
            config,
            bind,
            allow_origin,
            max_questions,
        } => handle_serve(config, bind, allow_origin, max_questions),
        Commands::Lesson {
            subject,
            grade,
            topic,
            subtopic,
            format,
            save,
            owner,
        } => handle_lesson(subject, grade, topic, subtopic, format, save, owner),
        Commands::Questions {
            subject,
            topic,
            difficulty,
            question_type,
            count,
            owner,
        } => handle_questions(subject, topic, difficulty, question_type, count, owner),
        Commands::Tutor { message, topic } => handle_tutor(message, topic),
        Commands::Schema { target } => handle_schema(target),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
