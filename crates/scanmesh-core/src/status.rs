//! Codec status handling.
//!
//! [`ErrorCode`] is the codec's native status taxonomy. Failures travel as
//! [`CodecError`] inside the usual `Result` aliases so codec internals can
//! propagate with `?`.

use std::fmt;

use thiserror::Error;

/// Codec status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorCode {
    /// Operation completed successfully
    #[default]
    Ok = 0,
    /// Used for general errors
    DracoError = -1,
    /// Error when handling input or output stream
    IoError = -2,
    /// Invalid parameter passed to a function
    InvalidParameter = -3,
    /// Input not compatible with the current version
    UnsupportedVersion = -4,
    /// Input was created with an unknown version of the library
    UnknownVersion = -5,
    /// Input contains feature that is not supported
    UnsupportedFeature = -6,
}

impl ErrorCode {
    /// Every code, `Ok` first.
    pub const ALL: [ErrorCode; 7] = [
        ErrorCode::Ok,
        ErrorCode::DracoError,
        ErrorCode::IoError,
        ErrorCode::InvalidParameter,
        ErrorCode::UnsupportedVersion,
        ErrorCode::UnknownVersion,
        ErrorCode::UnsupportedFeature,
    ];

    /// Returns the name of this error code as a string
    pub const fn name(self) -> &'static str {
        match self {
            ErrorCode::Ok => "OK",
            ErrorCode::DracoError => "DRACO_ERROR",
            ErrorCode::IoError => "IO_ERROR",
            ErrorCode::InvalidParameter => "INVALID_PARAMETER",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::UnknownVersion => "UNKNOWN_VERSION",
            ErrorCode::UnsupportedFeature => "UNSUPPORTED_FEATURE",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A failed codec operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("General error: {0}")]
    DracoError(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("Unsupported version: {0}")]
    UnsupportedVersion(String),
    #[error("Unknown version: {0}")]
    UnknownVersion(String),
    #[error("Unsupported feature: {0}")]
    UnsupportedFeature(String),
}

impl CodecError {
    /// Builds an error for a non-OK code. `ErrorCode::Ok` is treated as a
    /// general error since a success code cannot describe a failure.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        let message = message.into();
        match code {
            ErrorCode::Ok | ErrorCode::DracoError => CodecError::DracoError(message),
            ErrorCode::IoError => CodecError::IoError(message),
            ErrorCode::InvalidParameter => CodecError::InvalidParameter(message),
            ErrorCode::UnsupportedVersion => CodecError::UnsupportedVersion(message),
            ErrorCode::UnknownVersion => CodecError::UnknownVersion(message),
            ErrorCode::UnsupportedFeature => CodecError::UnsupportedFeature(message),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CodecError::DracoError(_) => ErrorCode::DracoError,
            CodecError::IoError(_) => ErrorCode::IoError,
            CodecError::InvalidParameter(_) => ErrorCode::InvalidParameter,
            CodecError::UnsupportedVersion(_) => ErrorCode::UnsupportedVersion,
            CodecError::UnknownVersion(_) => ErrorCode::UnknownVersion,
            CodecError::UnsupportedFeature(_) => ErrorCode::UnsupportedFeature,
        }
    }

    /// The message without the code prefix.
    pub fn message(&self) -> &str {
        match self {
            CodecError::DracoError(m)
            | CodecError::IoError(m)
            | CodecError::InvalidParameter(m)
            | CodecError::UnsupportedVersion(m)
            | CodecError::UnknownVersion(m)
            | CodecError::UnsupportedFeature(m) => m,
        }
    }
}

impl From<std::io::Error> for CodecError {
    fn from(err: std::io::Error) -> Self {
        CodecError::IoError(err.to_string())
    }
}

pub type Status = Result<(), CodecError>;

/// Equivalent of `StatusOr<T>`.
pub type StatusResult<T> = Result<T, CodecError>;
