use crate::helpers::JsonResponse;
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

/// Persisted entity kinds, used to name what could not be found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Product,
    Comment,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Product => write!(f, "product"),
            Self::Comment => write!(f, "comment"),
        }
    }
}

/// Mutations restricted to the owner of the resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    DeleteComment,
    UpdateProduct,
    DeleteProduct,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeleteComment => write!(f, "delete comment"),
            Self::UpdateProduct => write!(f, "update product"),
            Self::DeleteProduct => write!(f, "delete product"),
        }
    }
}

/// Path a rating submission has to take: insert a new row or update the existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingIntent {
    Create,
    Update,
}

impl fmt::Display for RatingIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::Update => write!(f, "update"),
        }
    }
}

/// Failures reported by an entity store.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    /// A uniqueness rule of the store was violated.
    #[error("Conflict: {0}")]
    Conflict(String),
    /// The referenced product does not exist (any more).
    #[error("Missing parent: {0}")]
    MissingParent(String),
    /// The row to update does not exist (any more).
    #[error("Gone: {0}")]
    Gone(String),
    #[error("Database error: {0}")]
    Database(String),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    #[error("{entity} not found")]
    NotFound { entity: Entity },

    #[error("user {actor} is not allowed to {action}")]
    Forbidden { actor: String, action: Action },

    #[error("{reason}")]
    Conflict { reason: String },

    #[error("wrong rating path, use {expected_path} instead")]
    IntentMismatch { expected_path: RatingIntent },

    #[error("invalid {field}: {constraint}")]
    InvalidValue { field: String, constraint: String },

    #[error("authentication required")]
    Unauthenticated,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CatalogError {
    pub fn not_found(entity: Entity) -> Self {
        Self::NotFound { entity }
    }

    pub fn conflict(reason: impl Into<String>) -> Self {
        Self::Conflict {
            reason: reason.into(),
        }
    }

    pub fn invalid(field: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            constraint: constraint.into(),
        }
    }
}

impl ResponseError for CatalogError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::Conflict { .. } | Self::IntentMismatch { .. } => StatusCode::CONFLICT,
            Self::InvalidValue { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            Self::Store(err) => {
                tracing::error!(error = %err, "Store failure");
                "Internal Server Error".to_string()
            }
            err => err.to_string(),
        };

        HttpResponse::build(self.status_code())
            .json(JsonResponse::<()>::build().set_msg(message).to_json_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            CatalogError::not_found(Entity::Product).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CatalogError::Forbidden {
                actor: "u1".to_string(),
                action: Action::DeleteComment
            }
            .status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            CatalogError::IntentMismatch {
                expected_path: RatingIntent::Update
            }
            .status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            CatalogError::invalid("rating", "must be between 1 and 5").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CatalogError::Unauthenticated.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            CatalogError::from(StoreError::Database("boom".to_string())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            CatalogError::IntentMismatch {
                expected_path: RatingIntent::Create
            }
            .to_string(),
            "wrong rating path, use create instead"
        );
        assert_eq!(
            CatalogError::not_found(Entity::Comment).to_string(),
            "comment not found"
        );
        assert_eq!(
            CatalogError::Forbidden {
                actor: "u2".to_string(),
                action: Action::DeleteProduct
            }
            .to_string(),
            "user u2 is not allowed to delete product"
        );
    }
}
