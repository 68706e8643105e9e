use thiserror::Error;

/// Failure of a delayed square computation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareError {
    /// The input was below zero. Reported without waiting for the delay.
    #[error("Negative number not allowed")]
    NegativeInput,

    /// The scheduled task went away before it produced an outcome
    /// (runtime shutdown).
    #[error("Square computation was abandoned before it resolved")]
    Abandoned,
}

/// Error surfaced by the `pocket` binary, carrying the process exit code.
#[derive(Clone, Error)]
#[error("{message}")]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<SquareError> for AppError {
    fn from(err: SquareError) -> Self {
        AppError::new(3, err.to_string())
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}
