mod recipe;

pub(crate) use recipe::RecipeRow;
pub use recipe::{Recipe, RecordError};
