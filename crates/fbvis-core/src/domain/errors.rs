use std::path::PathBuf;
use thiserror::Error;

pub type VisResult<T> = Result<T, VisError>;

/// Error category with a stable process exit code, reported alongside the
/// message so batch drivers can route failures without string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisErrorCategory {
    InputValidation,
    IoSystem,
    Parse,
    Internal,
}

impl VisErrorCategory {
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::InputValidation => 2,
            Self::IoSystem => 3,
            Self::Parse => 4,
            Self::Internal => 5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::InputValidation => "INPUT_FATAL",
            Self::IoSystem => "IO_FATAL",
            Self::Parse => "PARSE_FATAL",
            Self::Internal => "SYS_FATAL",
        }
    }
}

#[derive(Debug, Error)]
pub enum VisError {
    #[error("expected exactly one file matching '{pattern}', found {found}")]
    InputDiscovery { pattern: String, found: usize },

    #[error("io failure on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("property '{name}' has no registered unit in the catalog")]
    UnknownProperty { name: String },

    #[error("marker '{marker}' not found in assembled log")]
    BlockNotFound { marker: String },

    #[error("malformed block under '{marker}' at line {line}: {message}")]
    MalformedBlock {
        marker: String,
        line: usize,
        message: String,
    },

    #[error("parameter '{identifier}' has baseline value 0.0; percent deviation is undefined")]
    DivisionByZero { identifier: String },

    #[error("internal failure: {message}")]
    Internal { message: String },
}

impl VisError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn malformed_block(
        marker: impl Into<String>,
        line: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::MalformedBlock {
            marker: marker.into(),
            line,
            message: message.into(),
        }
    }

    pub const fn category(&self) -> VisErrorCategory {
        match self {
            Self::InputDiscovery { .. } | Self::UnknownProperty { .. } => {
                VisErrorCategory::InputValidation
            }
            Self::Io { .. } => VisErrorCategory::IoSystem,
            Self::BlockNotFound { .. }
            | Self::MalformedBlock { .. }
            | Self::DivisionByZero { .. } => VisErrorCategory::Parse,
            Self::Internal { .. } => VisErrorCategory::Internal,
        }
    }

    pub const fn exit_code(&self) -> i32 {
        self.category().exit_code()
    }

    pub fn diagnostic_line(&self) -> String {
        format!("fbvis [{}]: {}", self.category().label(), self)
    }
}
