use thiserror::Error;

#[derive(Error, Debug)]
pub enum EduforgeError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid value '{value}' for field '{field}'. Valid values: {}", valid.join(", "))]
    InvalidEnumValue {
        field: &'static str,
        value: String,
        valid: Vec<String>,
    },

    #[error("Invalid count '{0}': expected a whole number")]
    InvalidCount(String),

    #[error("Count {count} out of range (allowed {min}-{max})")]
    CountOutOfRange { count: i64, min: usize, max: usize },

    #[error("Invalid teacher id '{0}': expected a UUID")]
    InvalidOwner(String),

    #[error("Invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EduforgeError {
    /// True for errors caused by the caller's input rather than the host.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            EduforgeError::MissingField(_)
                | EduforgeError::InvalidEnumValue { .. }
                | EduforgeError::InvalidCount(_)
                | EduforgeError::CountOutOfRange { .. }
                | EduforgeError::InvalidOwner(_)
                | EduforgeError::Json(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, EduforgeError>;
