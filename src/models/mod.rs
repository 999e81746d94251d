mod comment;
mod like;
mod product;
pub mod rating;
pub mod user;

pub use comment::*;
pub use like::*;
pub use product::*;
pub use rating::*;
pub use user::*;
