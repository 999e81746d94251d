pub mod aggregation;
pub mod guard;
mod interaction;
mod locks;
mod product;

pub use interaction::InteractionService;
pub use locks::{InteractionKey, KeyGuard, KeyedLocks};
pub use product::ProductService;
