pub(crate) mod comment;
pub mod health_checks;
pub(crate) mod like;
mod liked;
pub(crate) mod product;
pub(crate) mod rating;

pub use health_checks::*;
pub use liked::*;
