use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct ProductForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 150)]
    pub title: String,
    /// Derived from the title when missing.
    #[validate(max_length = 170)]
    pub slug: Option<String>,
    #[serde(default)]
    pub description: String,
    #[validate(max_length = 255)]
    pub image: Option<String>,
}

/// Slug and owner are not part of the form, they never change.
#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct ProductUpdateForm {
    #[validate(min_length = 1)]
    #[validate(max_length = 150)]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(max_length = 255)]
    pub image: Option<String>,
}

impl ProductUpdateForm {
    pub fn update(self, product: &mut models::Product) {
        if let Some(title) = self.title {
            product.title = title;
        }

        if let Some(description) = self.description {
            product.description = description;
        }

        if let Some(image) = self.image {
            product.image = image;
        }
    }
}
