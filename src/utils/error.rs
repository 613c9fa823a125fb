use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumlinesError {
    #[error("file path is required")]
    MissingPath,

    #[error("given file does not exist: {path}")]
    FileNotFound { path: String },

    #[error("given file is empty")]
    EmptyFile,

    #[error("cannot divide by zero")]
    DivideByZero,

    #[error("negative operands are not allowed: {x}, {y}")]
    NegativeOperand { x: i32, y: i32 },

    #[error("multiplication overflows 32-bit range: {x} * {y}")]
    MultiplyOverflow { x: i32, y: i32 },
}

pub type Result<T> = std::result::Result<T, NumlinesError>;
