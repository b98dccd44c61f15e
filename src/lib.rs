pub mod config;
pub mod dataset;
pub mod ffi;
pub mod model;
pub mod search;

pub use dataset::{DataLoadError, Dataset, InsufficientDataError};
pub use model::*;
pub use search::{
    search_by_category, search_by_category_name, search_by_filters, search_by_ingredients,
    search_by_name, search_by_raw_filters, Category, Diet, Difficulty, IngredientQuery,
    InvalidInput, SearchFilters,
};

uniffi::setup_scaffolding!();
