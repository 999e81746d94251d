mod comment;
mod like;
mod product;

pub use comment::Comment;
pub use like::{LikedProduct, Liker};
pub use product::{AggregatedProductView, ProductListItem};
