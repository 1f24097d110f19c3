use serde::Serialize;
use serde_json::Value;
use staff_core::StaffError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A user-facing message produced by a dashboard action.
///
/// Failures carry `detail`: the client-facing JSON of the underlying error
/// (name, message, code, className), never its source chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self::titled(NoticeLevel::Success, "Success", message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::titled(NoticeLevel::Error, "Error", message)
    }

    pub fn failure(message: impl Into<String>, cause: &StaffError) -> Self {
        Self {
            detail: Some(cause.to_json()),
            ..Self::error(message)
        }
    }

    pub fn titled(level: NoticeLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
            detail: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}
