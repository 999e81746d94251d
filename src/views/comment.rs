use crate::models;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::convert::From;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    pub id: i32,
    pub user: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl From<models::Comment> for Comment {
    fn from(comment: models::Comment) -> Self {
        Self {
            id: comment.id,
            user: comment.username,
            text: comment.text,
            created_at: comment.created_at,
        }
    }
}
