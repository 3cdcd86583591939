use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum AppError {
    Io(io::Error),
    /// The nav root exists but is not a directory
    NotADirectory(PathBuf),
    Config(String),
    InvalidPattern(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "IO error: {}", e),
            AppError::NotADirectory(path) => {
                write!(f, "Not a directory: {}", path.display())
            }
            AppError::Config(msg) => write!(f, "Config error: {}", msg),
            AppError::InvalidPattern(msg) => write!(f, "Invalid pattern: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(e: io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<globset::Error> for AppError {
    fn from(e: globset::Error) -> Self {
        AppError::InvalidPattern(e.to_string())
    }
}
