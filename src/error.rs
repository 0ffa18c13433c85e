use std::fmt;

#[derive(Debug)]
pub enum SpliceError {
    Malformed(String),
    Io(std::io::Error),
    Other(String),
}

impl fmt::Display for SpliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpliceError::Malformed(e) => write!(f, "Malformed input: {}", e),
            SpliceError::Io(e) => write!(f, "IO error: {}", e),
            SpliceError::Other(e) => write!(f, "Error: {}", e),
        }
    }
}

impl std::error::Error for SpliceError {}

impl From<std::io::Error> for SpliceError {
    fn from(err: std::io::Error) -> Self {
        SpliceError::Io(err)
    }
}

impl From<String> for SpliceError {
    fn from(err: String) -> Self {
        SpliceError::Other(err)
    }
}

impl From<&str> for SpliceError {
    fn from(err: &str) -> Self {
        SpliceError::Other(err.to_string())
    }
}
