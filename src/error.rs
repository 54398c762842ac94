// Client error types
use std::fmt;

/// Failure of a single REST call against a resource endpoint.
///
/// This is the only error the HTTP adapter propagates. Callers on the read
/// path swallow it and degrade to a fixed dataset; callers on the mutation
/// path surface it as a notification.
#[derive(Debug, thiserror::Error)]
#[error("request to {endpoint} failed: {cause}")]
pub struct RequestError {
    pub endpoint: String,
    #[source]
    pub cause: RequestCause,
}

#[derive(Debug, thiserror::Error)]
pub enum RequestCause {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid request URL: {0}")]
    InvalidUrl(String),
}

impl RequestError {
    pub fn new(endpoint: impl Into<String>, cause: impl Into<RequestCause>) -> Self {
        Self {
            endpoint: endpoint.into(),
            cause: cause.into(),
        }
    }

    pub fn status(endpoint: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            cause: RequestCause::Status {
                status,
                body: body.into(),
            },
        }
    }

    /// HTTP status when the server answered with a non-2xx code
    pub fn status_code(&self) -> Option<u16> {
        match &self.cause {
            RequestCause::Status { status, .. } => Some(*status),
            RequestCause::Transport(err) => err.status().map(|s| s.as_u16()),
            RequestCause::Decode(_) | RequestCause::InvalidUrl(_) => None,
        }
    }
}

/// Form field editing and validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Unknown field '{field}' for {resource}")]
    UnknownField { resource: &'static str, field: String },

    #[error("Field '{field}' expects an integer, got '{value}'")]
    NotAnInteger { field: &'static str, value: String },

    #[error("Field '{field}' must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
        value: i64,
    },

    #[error("Field '{field}' must be one of: {options}")]
    NotAChoice { field: &'static str, options: String },

    #[error("Field '{0}' is required")]
    MissingRequired(&'static str),

    #[error("Invalid assignment '{0}', expected field=value")]
    InvalidAssignment(String),

    #[error("Form could not be encoded: {0}")]
    Encoding(String),
}

/// Durable storage failures
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Misuse of a list screen: acting on an affordance that is not rendered,
/// or on a modal that is not open.
#[derive(Debug, thiserror::Error)]
pub enum ScreenError {
    #[error("{0} requires a logged-in session")]
    AffordanceHidden(Affordance),

    #[error("No form is open")]
    ModalClosed,

    #[error("A form is already open")]
    ModalAlreadyOpen,

    #[error("No {resource} record with id '{id}'")]
    UnknownRecord { resource: &'static str, id: String },

    #[error("{resource} record '{id}' is sample data shown while the API is unreachable")]
    SampleRecord { resource: &'static str, id: String },

    #[error(transparent)]
    InvalidForm(#[from] FieldError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    AddNew,
    Edit,
    Delete,
}

impl fmt::Display for Affordance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Affordance::AddNew => write!(f, "Add New"),
            Affordance::Edit => write!(f, "Edit"),
            Affordance::Delete => write!(f, "Delete"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_reports_endpoint_and_code() {
        let err = RequestError::status("/skills", 404, "not found");
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(
            err.to_string(),
            "request to /skills failed: server responded 404: not found"
        );
    }

    #[test]
    fn hidden_affordance_message_names_the_action() {
        let err = ScreenError::AffordanceHidden(Affordance::AddNew);
        assert_eq!(err.to_string(), "Add New requires a logged-in session");
    }
}
