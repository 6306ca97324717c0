use thiserror::Error;

/// A reason the validator rejects a draft, in rule order. The submission
/// handler surfaces the first one and aborts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("Please fill in all required fields (skills too).")]
    MissingField { field: &'static str },

    #[error("Please enter a valid portfolio URL (e.g., https://example.com).")]
    InvalidUrl { value: String },

    #[error("A graduate with this email already exists.")]
    DuplicateEmail { email: String },
}

#[derive(Error, Debug)]
pub enum PortalError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{message}")]
    RemoteError { message: String },

    #[error("Validation failed: {0}")]
    ValidationError(#[from] ValidationFailure),

    #[error("Unknown record id: {id}")]
    UnknownRecordError { id: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Validation,
    Network,
    Remote,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// User fixes input and resubmits.
    Low,
    /// Transient; retrying the same action may succeed.
    Medium,
    /// The action failed and will not succeed unchanged.
    High,
}

impl PortalError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::ValidationError(_) | Self::UnknownRecordError { .. } => ErrorCategory::Validation,
            Self::ApiError(_) => ErrorCategory::Network,
            Self::RemoteError { .. } => ErrorCategory::Remote,
            Self::SerializationError(_) | Self::IoError(_) => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::Low,
            ErrorCategory::Network | ErrorCategory::Remote => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Internal => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ValidationError(reason) => reason.to_string(),
            Self::RemoteError { message } => message.clone(),
            Self::ApiError(_) => "Could not reach the graduates API.".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => "Check the endpoint and config file values.",
            ErrorCategory::Validation => "Fix the highlighted fields and submit again.",
            ErrorCategory::Network => "Check connectivity, then retry (see --retries).",
            ErrorCategory::Remote => "The server rejected the request; review its message.",
            ErrorCategory::Internal => "Re-run with --verbose and inspect the logs.",
        }
    }
}

pub type Result<T> = std::result::Result<T, PortalError>;
