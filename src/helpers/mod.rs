mod actor;
pub(crate) mod json;
pub mod slug;

pub use actor::*;
pub use json::*;
pub use slug::slugify;
