use thiserror::Error;

use crate::model::ids::CategoryId;

/// A question category such as "Science" or "History".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: CategoryId,
    kind: String,
}

impl Category {
    /// Create a category with a trimmed, non-empty type label.
    ///
    /// # Errors
    ///
    /// Returns `CategoryError::EmptyType` if the label is blank.
    pub fn new(id: CategoryId, kind: impl Into<String>) -> Result<Self, CategoryError> {
        let raw = kind.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CategoryError::EmptyType);
        }
        Ok(Self {
            id,
            kind: trimmed.to_string(),
        })
    }

    #[must_use]
    pub fn id(&self) -> CategoryId {
        self.id
    }

    /// Display label, exposed as `type` on the wire.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CategoryError {
    #[error("category type cannot be empty")]
    EmptyType,
}
