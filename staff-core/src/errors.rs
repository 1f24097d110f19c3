//! # Errors
//!
//! Unexpected failures travel as `anyhow::Error`. When a layer knows what
//! went wrong it wraps a `StaffError`, so the dashboard can recover the
//! kind and status code with `StaffError::normalize` at its boundary.
//!
//! Not-found and invalid input are not errors here: the store answers
//! `None` / `false` and validation answers with field messages.

use std::fmt;

use anyhow::Error as AnyError;

/// A convenience result type for StaffDesk core APIs.
pub type StaffResult<T> = std::result::Result<T, AnyError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    BadRequest,       // 400
    NotAuthenticated, // 401
    Conflict,         // 409
    GeneralError,     // 500
    NotImplemented,   // 501
}

impl ErrorKind {
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::NotAuthenticated => 401,
            ErrorKind::Conflict => 409,
            ErrorKind::GeneralError => 500,
            ErrorKind::NotImplemented => 501,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "BadRequest",
            ErrorKind::NotAuthenticated => "NotAuthenticated",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::GeneralError => "GeneralError",
            ErrorKind::NotImplemented => "NotImplemented",
        }
    }

    /// Kebab-cased class name (e.g. "not-authenticated").
    pub fn class_name(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "bad-request",
            ErrorKind::NotAuthenticated => "not-authenticated",
            ErrorKind::Conflict => "conflict",
            ErrorKind::GeneralError => "general-error",
            ErrorKind::NotImplemented => "not-implemented",
        }
    }
}

/// A structured error that can live inside `anyhow::Error`.
#[derive(Debug)]
pub struct StaffError {
    pub kind: ErrorKind,
    pub message: String,
    pub source: Option<AnyError>,
}

impl StaffError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: AnyError) -> Self {
        self.source = Some(source);
        self
    }

    pub fn code(&self) -> u16 {
        self.kind.status_code()
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn class_name(&self) -> &'static str {
        self.kind.class_name()
    }

    pub fn into_anyhow(self) -> AnyError {
        AnyError::new(self)
    }

    pub fn from_anyhow(err: &AnyError) -> Option<&StaffError> {
        err.downcast_ref::<StaffError>()
    }

    pub fn is_kind(err: &AnyError, kind: ErrorKind) -> bool {
        Self::from_anyhow(err).is_some_and(|e| e.kind == kind)
    }

    /// Recover the `StaffError` inside `err`, or wrap a foreign error as
    /// `GeneralError` keeping it as the source.
    pub fn normalize(err: AnyError) -> StaffError {
        match err.downcast::<StaffError>() {
            Ok(staff) => staff,
            Err(other) => StaffError::general_error(other.to_string()).with_source(other),
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadRequest, msg)
    }
    pub fn not_authenticated(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotAuthenticated, msg)
    }
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, msg)
    }
    pub fn general_error(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::GeneralError, msg)
    }
    pub fn not_implemented(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotImplemented, msg)
    }
}

impl fmt::Display for StaffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name(), self.code(), self.message)
    }
}

impl std::error::Error for StaffError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

#[cfg(feature = "serde")]
impl StaffError {
    /// Client-facing shape. The inner `source` is never included.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name(),
            "message": self.message,
            "code": self.code(),
            "className": self.class_name(),
        })
    }
}

/// Return early with a `StaffError` wrapped in `anyhow::Error`.
#[macro_export]
macro_rules! bail_staff {
    ($ctor:ident, $msg:expr) => {
        return Err($crate::errors::StaffError::$ctor($msg).into_anyhow())
    };
    ($ctor:ident, $fmt:expr, $($arg:tt)*) => {
        return Err($crate::errors::StaffError::$ctor(format!($fmt, $($arg)*)).into_anyhow())
    };
}
