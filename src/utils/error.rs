use thiserror::Error;

#[derive(Error, Debug)]
pub enum DetectError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Notebook JSON error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid keyword pattern: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Malformed notebook: {message}")]
    NotebookError { message: String },

    #[error("Unsupported file '{path}': expected a .py or .ipynb file")]
    UnsupportedFileError { path: String },
}

impl DetectError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            DetectError::IoError(e) => format!("Could not access file: {}", e),
            DetectError::SerializationError(_) | DetectError::NotebookError { .. } => {
                "The notebook could not be read as nbformat JSON".to_string()
            }
            DetectError::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            DetectError::PatternError(_) => "A keyword could not be turned into a pattern".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DetectError::IoError(_) => "Check that the path exists and is readable",
            DetectError::SerializationError(_) | DetectError::NotebookError { .. } => {
                "Open the notebook in Jupyter and save it again"
            }
            DetectError::TomlError(_) => "Fix the TOML syntax in the configuration file",
            DetectError::PatternError(_) => "Use plain identifiers as keyword names",
            DetectError::MissingConfigError { .. }
            | DetectError::InvalidConfigValueError { .. } => {
                "Review the [[keywords]] and extensions entries of the configuration"
            }
            DetectError::UnsupportedFileError { .. } => "Only .py and .ipynb files can be scanned",
        }
    }
}

pub type Result<T> = std::result::Result<T, DetectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        let err: DetectError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, DetectError::IoError(_)));
        assert!(err.user_friendly_message().contains("gone"));
    }

    #[test]
    fn test_unsupported_file_message() {
        let err = DetectError::UnsupportedFileError {
            path: "notes.txt".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unsupported file 'notes.txt': expected a .py or .ipynb file"
        );
        assert_eq!(err.recovery_suggestion(), "Only .py and .ipynb files can be scanned");
    }
}
