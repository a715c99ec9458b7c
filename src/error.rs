use thiserror::Error;

/// A single field that failed form validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum RentifyError {
    /// One field failed a constraint
    #[error("{field}: {message}")]
    Validation { field: &'static str, message: String },
    /// A whole form failed, one entry per offending field
    #[error("{} field(s) failed validation", .0.len())]
    Form(Vec<FieldError>),
    /// Checked before any model call is attempted
    #[error("missing information: {0}")]
    MissingPrecondition(String),
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },
    /// Model unreachable, bad status or malformed response
    #[error("model call failed: {0}")]
    External(String),
    #[error("failed to enhance description with AI")]
    EnhancementFailed,
    #[error("failed to generate titles with AI")]
    TitleGenerationFailed,
    #[error("could not process smart search request")]
    SmartSearchFailed,
    #[error("session storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, RentifyError>;

impl RentifyError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// The non-blocking notice a caller shows for this failure
    pub fn notification(&self) -> Notification {
        let (title, description) = match self {
            Self::Validation { .. } | Self::Form(_) => {
                ("Invalid input", self.to_string())
            }
            Self::MissingPrecondition(detail) => ("Missing Information", detail.clone()),
            Self::NotFound { .. } => ("Not Found", self.to_string()),
            Self::External(_) => (
                "Request Failed",
                "Could not reach the AI service. Please try again.".to_string(),
            ),
            Self::EnhancementFailed => (
                "AI Enhancement Failed",
                "Could not enhance the description. Please try again.".to_string(),
            ),
            Self::TitleGenerationFailed => (
                "AI Title Generation Failed",
                "Could not generate titles. Please try again.".to_string(),
            ),
            Self::SmartSearchFailed => (
                "Smart Search Failed",
                "Could not process your request. Please try again.".to_string(),
            ),
            Self::Storage(_) => ("Session Error", self.to_string()),
        };

        Notification {
            title: title.to_string(),
            description,
            destructive: true,
        }
    }
}

/// A dismissable message surfaced to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub destructive: bool,
}
