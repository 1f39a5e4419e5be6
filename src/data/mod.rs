pub mod namespace;
pub mod recipe_book;

pub use namespace::{ItemNamespace, RawNamespace};
pub use recipe_book::RecipeBook;
