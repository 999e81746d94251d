use crate::models;
use crate::views;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::convert::From;

/// Short form used by the product listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductListItem {
    pub user: String,
    pub title: String,
    pub image: String,
    pub slug: String,
}

impl From<models::Product> for ProductListItem {
    fn from(product: models::Product) -> Self {
        Self {
            user: product.username,
            title: product.title,
            image: product.image,
            slug: product.slug,
        }
    }
}

/// Product with its interactions folded in. Computed on every read, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedProductView {
    pub slug: String,
    pub user: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub average_rating: f64,
    pub like_count: usize,
    pub likers: Vec<views::Liker>,
    pub comments: Vec<views::Comment>,
}
