//! Write policies checked before anything touches the store.
//!
//! All functions here are pure: they look at the actor and at the current
//! state handed in by the caller and either allow the write (telling which
//! write) or return the typed failure. Nothing is mutated.

use crate::errors::{Action, CatalogError, RatingIntent, Result};
use crate::models::{self, MAX_RATE, MIN_RATE};

/// Only the owner of a resource may mutate it.
pub fn authorize_mutation(actor: &models::User, resource_owner: &str, action: Action) -> Result<()> {
    if actor.id == resource_owner {
        Ok(())
    } else {
        tracing::info!(actor = %actor.id, %action, "Mutation refused, not the owner");
        Err(CatalogError::Forbidden {
            actor: actor.id.clone(),
            action,
        })
    }
}

/// The write a rating submission turns into.
#[derive(Debug, Clone, PartialEq)]
pub enum RatingWrite {
    Create,
    Update(models::Rating),
}

/// Callers declare whether they create or update a rating. A declaration
/// that does not match the stored state is refused, never silently turned
/// into the other path.
pub fn check_rating_write_policy(
    existing: Option<models::Rating>,
    intent: RatingIntent,
) -> Result<RatingWrite> {
    match (existing, intent) {
        (None, RatingIntent::Create) => Ok(RatingWrite::Create),
        (Some(rating), RatingIntent::Update) => Ok(RatingWrite::Update(rating)),
        (Some(_), RatingIntent::Create) => Err(CatalogError::IntentMismatch {
            expected_path: RatingIntent::Update,
        }),
        (None, RatingIntent::Update) => Err(CatalogError::IntentMismatch {
            expected_path: RatingIntent::Create,
        }),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeOp {
    Like,
    Unlike,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LikeWrite {
    Insert,
    Delete(models::Like),
}

pub fn check_like_write_policy(existing: Option<models::Like>, op: LikeOp) -> Result<LikeWrite> {
    match (existing, op) {
        (None, LikeOp::Like) => Ok(LikeWrite::Insert),
        (Some(like), LikeOp::Unlike) => Ok(LikeWrite::Delete(like)),
        (Some(_), LikeOp::Like) => Err(CatalogError::conflict("already liked")),
        (None, LikeOp::Unlike) => Err(CatalogError::conflict("not liked yet")),
    }
}

pub fn validate_rating_value(value: i32) -> Result<i32> {
    if (MIN_RATE..=MAX_RATE).contains(&value) {
        Ok(value)
    } else {
        Err(CatalogError::invalid(
            "rating",
            format!("must be between {} and {}", MIN_RATE, MAX_RATE),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn user(id: &str) -> models::User {
        models::User {
            id: id.to_string(),
            username: format!("{}-name", id),
            email: format!("{}@example.com", id),
        }
    }

    fn created_at() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap()
    }

    fn rating() -> models::Rating {
        models::Rating {
            id: 1,
            user_id: "u2".to_string(),
            username: "bob".to_string(),
            product_slug: "p".to_string(),
            rate: 3,
            created_at: created_at(),
            updated_at: created_at(),
        }
    }

    fn like() -> models::Like {
        models::Like {
            id: 1,
            user_id: "u3".to_string(),
            username: "carol".to_string(),
            product_slug: "p".to_string(),
            created_at: created_at(),
        }
    }

    #[test]
    fn test_owner_may_mutate() {
        assert!(authorize_mutation(&user("u1"), "u1", Action::DeleteComment).is_ok());
    }

    #[test]
    fn test_non_owner_is_forbidden() {
        let err = authorize_mutation(&user("u2"), "u1", Action::DeleteComment).unwrap_err();
        assert_eq!(
            err,
            CatalogError::Forbidden {
                actor: "u2".to_string(),
                action: Action::DeleteComment,
            }
        );
    }

    #[test]
    fn test_rating_policy_matching_intent() {
        assert_eq!(
            check_rating_write_policy(None, RatingIntent::Create).unwrap(),
            RatingWrite::Create
        );
        assert_eq!(
            check_rating_write_policy(Some(rating()), RatingIntent::Update).unwrap(),
            RatingWrite::Update(rating())
        );
    }

    #[test]
    fn test_rating_policy_mismatched_intent() {
        assert_eq!(
            check_rating_write_policy(Some(rating()), RatingIntent::Create).unwrap_err(),
            CatalogError::IntentMismatch {
                expected_path: RatingIntent::Update
            }
        );
        assert_eq!(
            check_rating_write_policy(None, RatingIntent::Update).unwrap_err(),
            CatalogError::IntentMismatch {
                expected_path: RatingIntent::Create
            }
        );
    }

    #[test]
    fn test_like_policy() {
        assert_eq!(check_like_write_policy(None, LikeOp::Like).unwrap(), LikeWrite::Insert);
        assert_eq!(
            check_like_write_policy(Some(like()), LikeOp::Unlike).unwrap(),
            LikeWrite::Delete(like())
        );
        assert_eq!(
            check_like_write_policy(Some(like()), LikeOp::Like).unwrap_err(),
            CatalogError::conflict("already liked")
        );
        assert_eq!(
            check_like_write_policy(None, LikeOp::Unlike).unwrap_err(),
            CatalogError::conflict("not liked yet")
        );
    }

    #[test]
    fn test_rating_value_domain() {
        for value in 1..=5 {
            assert_eq!(validate_rating_value(value).unwrap(), value);
        }
        for value in [-1, 0, 6, 10, i32::MAX] {
            assert!(matches!(
                validate_rating_value(value),
                Err(CatalogError::InvalidValue { .. })
            ));
        }
    }
}
