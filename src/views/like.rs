use crate::models;
use serde::Serialize;
use std::convert::From;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Liker {
    pub username: String,
}

impl From<&models::Like> for Liker {
    fn from(like: &models::Like) -> Self {
        Self {
            username: like.username.clone(),
        }
    }
}

/// One entry of the "products I liked" listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LikedProduct {
    pub products: String, // product title
    pub user: String,
    pub url: String,
}

impl LikedProduct {
    pub fn new(like: models::Like, product: &models::Product) -> Self {
        Self {
            products: product.title.clone(),
            user: like.username,
            url: format!("/product/{}", product.slug),
        }
    }
}
