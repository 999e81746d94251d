use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// Body returned by the identity provider for a bearer token.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserForm {
    pub user: User,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct User {
    #[validate(min_length = 1)]
    pub id: String,
    #[validate(min_length = 1)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

impl TryFrom<UserForm> for models::User {
    type Error = String;

    fn try_from(form: UserForm) -> Result<Self, Self::Error> {
        form.user
            .validate()
            .map_err(|errors| format!("invalid user received: {}", errors))?;

        Ok(models::User {
            id: form.user.id,
            username: form.user.username,
            email: form.user.email,
        })
    }
}
