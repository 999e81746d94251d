//! PostgreSQL queries, one module per table.
//!
//! Every function takes the pool explicitly and reports failures as
//! [`StoreError`]. Uniqueness and foreign key violations are told apart from
//! other database errors so that callers can map them onto domain failures.

pub mod comment;
pub mod like;
pub mod product;
pub mod rating;

use crate::errors::StoreError;

pub(crate) fn store_error(context: &str, err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            StoreError::Conflict(format!("{}: duplicate record", context))
        }
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            StoreError::MissingParent(format!("{}: product does not exist", context))
        }
        e => {
            tracing::error!("Failed to execute query ({}): {:?}", context, e);
            StoreError::Database(context.to_string())
        }
    }
}
