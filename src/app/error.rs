use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("UI error: {0}")]
    Ui(String),
}

impl From<fltk::prelude::FltkError> for AppError {
    fn from(err: fltk::prelude::FltkError) -> Self {
        AppError::Ui(err.to_string())
    }
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::Ui("no display found".to_string());
        assert_eq!(err.to_string(), "UI error: no display found");
    }
}
