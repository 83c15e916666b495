//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`CafeShopError`]
//! via `#[from]`.

use serde::Serialize;

/// Top-level error returned by use-cases and repositories.
#[derive(Debug, thiserror::Error)]
pub enum CafeShopError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// Opaque storage failure, boxed so the domain stays free of IO crates.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Input that violates domain rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// One or more fields failed validation.
    #[error("invalid input: {}", summarize(.0))]
    Fields(Vec<FieldError>),

    /// A path identifier that is not a valid cafe shop id.
    #[error("invalid cafe shop id: {0}")]
    InvalidId(String),

    /// A field name outside the allow-list of mutable columns.
    #[error("unknown field: {0}")]
    UnknownField(String),
}

impl ValidationError {
    /// Field-level details, empty for non-field errors.
    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Fields(errors) => errors,
            Self::InvalidId(_) | Self::UnknownField(_) => &[],
        }
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|err| err.field)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
    pub code: &'static str,
}

impl FieldError {
    pub(crate) fn required(field: &'static str) -> Self {
        Self {
            field,
            message: "this field is required",
            code: "required",
        }
    }

    pub(crate) fn invalid_url(field: &'static str) -> Self {
        Self {
            field,
            message: "must be a valid URL",
            code: "invalid_url",
        }
    }

    pub(crate) fn invalid_choice(field: &'static str) -> Self {
        Self {
            field,
            message: "must be one of 0, 2, 4, 6, 8, 10",
            code: "invalid_choice",
        }
    }

    /// The value disagrees with the one carried by the request path.
    #[must_use]
    pub fn mismatch(field: &'static str) -> Self {
        Self {
            field,
            message: "must match the value in the request path",
            code: "mismatch",
        }
    }
}

/// A lookup that matched nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotFoundError {
    #[error("{entity} with ID {id} not found.")]
    Record { entity: &'static str, id: String },

    #[error("{collection} not found.")]
    Empty { collection: &'static str },
}
