use serde::{Deserialize, Serialize};

/// Blank text is refused by the service, after the product lookup.
#[derive(Serialize, Deserialize, Debug)]
pub struct CommentForm {
    pub text: String,
}
