use serde::{Deserialize, Serialize};

/// The value domain (1..=5) is checked by the rating guard, whatever the
/// request method, so that out of range values get the same typed failure.
#[derive(Serialize, Deserialize, Debug)]
pub struct RatingForm {
    pub rating: i32,
}
