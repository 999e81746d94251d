pub mod comment;
pub mod product;
pub mod rating;
pub mod user;

pub use comment::*;
pub use product::*;
pub use rating::*;
pub use user::UserForm;
