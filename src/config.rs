use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EduforgeError, Result};

/// Hard upper bound on questions per generation call.
pub const MAX_QUESTION_COUNT: usize = 20;
/// Questions generated when a request omits `count`.
pub const DEFAULT_QUESTION_COUNT: usize = 5;

pub const DEFAULT_BIND: &str = "127.0.0.1:8787";

/// Configuration for the HTTP host.
///
/// Loaded from an optional YAML file and overridden by CLI flags, then handed
/// to the router explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on
    pub bind: String,
    /// Value of `Access-Control-Allow-Origin` on every response
    pub allow_origin: String,
    /// Largest `count` accepted by question generation (at most 20)
    pub max_questions: usize,
    /// Count used when a request omits it
    pub default_question_count: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            allow_origin: "*".to_string(),
            max_questions: MAX_QUESTION_COUNT,
            default_question_count: DEFAULT_QUESTION_COUNT,
        }
    }
}

impl ServerConfig {
    /// Read a YAML config file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: ServerConfig = serde_yaml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_questions == 0 || self.max_questions > MAX_QUESTION_COUNT {
            return Err(EduforgeError::Config(format!(
                "max_questions must be between 1 and {}, got {}",
                MAX_QUESTION_COUNT, self.max_questions
            )));
        }
        if self.default_question_count == 0 || self.default_question_count > self.max_questions {
            return Err(EduforgeError::Config(format!(
                "default_question_count must be between 1 and {}, got {}",
                self.max_questions, self.default_question_count
            )));
        }
        if self.allow_origin.trim().is_empty() {
            return Err(EduforgeError::Config("allow_origin must not be empty".into()));
        }
        Ok(())
    }

    pub fn question_limits(&self) -> QuestionLimits {
        QuestionLimits {
            max: self.max_questions,
            default_count: self.default_question_count,
        }
    }
}

/// Bounds applied to the `count` of a question request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionLimits {
    pub max: usize,
    pub default_count: usize,
}

impl Default for QuestionLimits {
    fn default() -> Self {
        Self {
            max: MAX_QUESTION_COUNT,
            default_count: DEFAULT_QUESTION_COUNT,
        }
    }
}

impl QuestionLimits {
    /// Accept `count` if it lies in `1..=max`.
    pub fn check(&self, count: i64) -> Result<usize> {
        if count < 1 || count > self.max as i64 {
            return Err(EduforgeError::CountOutOfRange {
                count,
                min: 1,
                max: self.max,
            });
        }
        Ok(count as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind, "127.0.0.1:8787");
        assert_eq!(config.allow_origin, "*");
        assert_eq!(config.max_questions, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "bind: 0.0.0.0:9000\nmax_questions: 10").unwrap();

        let config = ServerConfig::load(file.path()).unwrap();
        assert_eq!(config.bind, "0.0.0.0:9000");
        assert_eq!(config.max_questions, 10);
        assert_eq!(config.default_question_count, 5);
        assert_eq!(config.allow_origin, "*");
    }

    #[test]
    fn test_max_above_hard_cap_rejected() {
        let config = ServerConfig {
            max_questions: 50,
            ..ServerConfig::default()
        };
        assert!(matches!(config.validate(), Err(EduforgeError::Config(_))));
    }

    #[test]
    fn test_default_count_above_max_rejected() {
        let config = ServerConfig {
            max_questions: 3,
            default_question_count: 5,
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_limits_check_bounds() {
        let limits = QuestionLimits { max: 10, default_count: 5 };
        assert_eq!(limits.check(1).unwrap(), 1);
        assert_eq!(limits.check(10).unwrap(), 10);
        assert!(limits.check(11).is_err());
        assert!(limits.check(-3).is_err());
    }
}
