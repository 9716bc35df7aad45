use std::io;

/// Errors raised while running lessons or reading documentation blocks.
#[derive(thiserror::Error, Debug)]
pub enum TourError {
    /// The output sink refused a write or flush.
    #[error("failed to write lesson output: {0}")]
    Io(#[from] io::Error),

    #[error("unknown lesson '{name}'")]
    UnknownLesson { name: String },

    /// A fenced block was opened but the document ended before it closed.
    #[error("unterminated code block opened on line {line}")]
    UnterminatedBlock { line: usize },
}

pub type TourResult<T> = Result<T, TourError>;
