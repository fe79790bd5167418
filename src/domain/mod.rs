//! Business domain types. Pure data with no actor-specific concerns.

pub mod analytics;
pub mod cart;
pub mod catalog;
pub mod product;

pub use analytics::*;
pub use cart::*;
pub use catalog::*;
pub use product::*;
