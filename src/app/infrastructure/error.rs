use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Could not run '{program}': {source}. Is it installed and on PATH?")]
    ConverterMissing {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Export("pandoc exited with status 43".to_string());
        assert_eq!(err.to_string(), "Export error: pandoc exited with status 43");

        let err = AppError::Settings("invalid font size".to_string());
        assert_eq!(err.to_string(), "Settings error: invalid font size");
    }

    #[test]
    fn test_converter_missing_names_program() {
        let err = AppError::ConverterMissing {
            program: "pandoc".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Could not run 'pandoc'"));
        assert!(msg.contains("PATH"));
    }
}
