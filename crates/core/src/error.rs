use thiserror::Error;

/// Errors surfaced by enumeration and refresh operations.
///
/// Individual fields that cannot be read never show up here; they degrade to
/// sentinel values on the record instead.
#[derive(Error, Debug)]
pub enum AcpiError {
    #[error("Not supported: {0}")]
    Unsupported(String),

    #[error("Not present: {0}")]
    NotPresent(String),

    #[error("Allocation failed: {0}")]
    AllocationFailure(String),

    #[error("Too many {category}: found {found}, capacity is {capacity}")]
    ItemLimitExceeded {
        category: &'static str,
        found: usize,
        capacity: usize,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AcpiError>;

impl AcpiError {
    pub fn unsupported<S: Into<String>>(msg: S) -> Self {
        Self::Unsupported(msg.into())
    }

    pub fn not_present<S: Into<String>>(msg: S) -> Self {
        Self::NotPresent(msg.into())
    }

    pub fn allocation<S: Into<String>>(msg: S) -> Self {
        Self::AllocationFailure(msg.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    pub fn item_limit(category: &'static str, found: usize, capacity: usize) -> Self {
        Self::ItemLimitExceeded {
            category,
            found,
            capacity,
        }
    }

    /// Numeric status code, as reported by the classic libacpi interface.
    pub fn code(&self) -> i32 {
        match self {
            Self::ItemLimitExceeded { .. } => -5,
            Self::NotPresent(_) => -3,
            Self::AllocationFailure(_) => -2,
            Self::Unsupported(_) => -1,
            Self::Config(_) => -6,
        }
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported(_))
    }
}
