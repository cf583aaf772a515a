use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    Unavailable,
    Rejected { key: String, reason: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "storage unavailable"),
            StorageError::Rejected { key, reason } => {
                write!(f, "storage rejected '{key}': {reason}")
            }
        }
    }
}

impl std::error::Error for StorageError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    InFlight,
    Transport(String),
    Status(u16),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::InFlight => write!(f, "a submission is already in flight"),
            SubmitError::Transport(reason) => write!(f, "request failed: {reason}"),
            SubmitError::Status(status) => write!(f, "endpoint answered with status {status}"),
        }
    }
}

impl std::error::Error for SubmitError {}
