//! UniFFI bindings for presentation layers written in other languages.
//!
//! This module provides FFI-safe types and functions for use with UniFFI.
//! Searches take raw strings and return owned records; bad input yields an
//! empty list, just like the Rust API.

use crate::dataset::{DataLoadError, Dataset, InsufficientDataError};
use crate::model::Recipe;
use crate::search::{self, Category, Diet, Difficulty, CUISINES, MEAL_TYPES};
use std::sync::Arc;

/// FFI-safe error type that wraps all possible errors.
#[derive(Debug, uniffi::Error, thiserror::Error)]
pub enum RecipeFinderError {
    #[error("IO error: {message}")]
    IoError { message: String },

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("Missing column: {message}")]
    MissingColumn { message: String },

    #[error("Insufficient data: {message}")]
    InsufficientData { message: String },
}

impl From<DataLoadError> for RecipeFinderError {
    fn from(e: DataLoadError) -> Self {
        match e {
            DataLoadError::Io { .. } => RecipeFinderError::IoError {
                message: e.to_string(),
            },
            DataLoadError::MissingColumn(column) => RecipeFinderError::MissingColumn {
                message: column,
            },
            DataLoadError::Csv(_) | DataLoadError::InvalidRecord { .. } => {
                RecipeFinderError::ParseError {
                    message: e.to_string(),
                }
            }
        }
    }
}

impl From<InsufficientDataError> for RecipeFinderError {
    fn from(e: InsufficientDataError) -> Self {
        RecipeFinderError::InsufficientData {
            message: e.to_string(),
        }
    }
}

/// FFI-safe representation of a recipe.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct FfiRecipe {
    pub name: String,
    pub ingredients: String,
    pub category: String,
    pub diet: String,
    pub meal_type: String,
    pub cuisine: String,
    /// `None` when the source value was blank or unreadable
    pub prep_time_minutes: Option<u32>,
    pub cook_time_minutes: Option<u32>,
    /// Prep plus cook time, if both are known
    pub total_time_minutes: Option<u32>,
    pub image_url: String,
    pub description: Option<String>,
    pub instructions: Option<String>,
}

impl From<&Recipe> for FfiRecipe {
    fn from(r: &Recipe) -> Self {
        FfiRecipe {
            name: r.name().to_string(),
            ingredients: r.ingredients().to_string(),
            category: r.category().to_string(),
            diet: r.diet().to_string(),
            meal_type: r.meal_type().to_string(),
            cuisine: r.cuisine().to_string(),
            prep_time_minutes: r.prep_time_minutes(),
            cook_time_minutes: r.cook_time_minutes(),
            total_time_minutes: r.total_time_minutes(),
            image_url: r.image_url().to_string(),
            description: r.description().map(str::to_string),
            instructions: r.instructions().map(str::to_string),
        }
    }
}

fn to_records(recipes: Vec<&Recipe>) -> Vec<FfiRecipe> {
    recipes.into_iter().map(FfiRecipe::from).collect()
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// A loaded dataset shared with foreign code.
#[derive(uniffi::Object)]
pub struct FfiDataset {
    inner: Dataset,
}

#[uniffi::export]
impl FfiDataset {
    /// Loads a dataset from a CSV file.
    #[uniffi::constructor]
    pub fn load(path: String) -> Result<Arc<Self>, RecipeFinderError> {
        let inner = Dataset::load(path.as_str())?;
        Ok(Arc::new(FfiDataset { inner }))
    }

    /// Reads a dataset from CSV text.
    #[uniffi::constructor]
    pub fn from_csv(content: String) -> Result<Arc<Self>, RecipeFinderError> {
        let inner = Dataset::from_reader(content.as_bytes())?;
        Ok(Arc::new(FfiDataset { inner }))
    }

    /// Number of recipes in the dataset.
    pub fn len(&self) -> u32 {
        saturating_u32(self.inner.len())
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Picks `count` distinct recipes at random.
    pub fn sample(&self, count: u32) -> Result<Vec<FfiRecipe>, RecipeFinderError> {
        let count = usize::try_from(count).unwrap_or(usize::MAX);
        Ok(to_records(self.inner.sample(count)?))
    }

    pub fn search_by_name(&self, query: String) -> Vec<FfiRecipe> {
        to_records(search::search_by_name(&self.inner, &query))
    }

    /// Up to three comma-separated ingredients, all of which must be present.
    pub fn search_by_ingredients(&self, ingredients: String) -> Vec<FfiRecipe> {
        to_records(search::search_by_ingredients(&self.inner, &ingredients))
    }

    pub fn search_by_category(&self, category: String) -> Vec<FfiRecipe> {
        to_records(search::search_by_category_name(&self.inner, &category))
    }

    pub fn search_by_filters(
        &self,
        difficulty: String,
        diet: String,
        meal: String,
        cuisine: String,
    ) -> Vec<FfiRecipe> {
        to_records(search::search_by_raw_filters(
            &self.inner,
            &difficulty,
            &diet,
            &meal,
            &cuisine,
        ))
    }
}

// ============================================================================
// Exported FFI Functions
// ============================================================================

/// Labels of the browsable categories, in display order.
#[uniffi::export]
pub fn categories() -> Vec<String> {
    Category::ALL.iter().map(|c| c.label().to_string()).collect()
}

/// Labels of the difficulty filter, in display order.
#[uniffi::export]
pub fn difficulties() -> Vec<String> {
    Difficulty::ALL.iter().map(|d| d.label().to_string()).collect()
}

/// Labels of the diet filter, in display order.
#[uniffi::export]
pub fn diets() -> Vec<String> {
    Diet::ALL.iter().map(|d| d.label().to_string()).collect()
}

#[uniffi::export]
pub fn meal_types() -> Vec<String> {
    MEAL_TYPES.iter().map(|m| m.to_string()).collect()
}

#[uniffi::export]
pub fn cuisines() -> Vec<String> {
    CUISINES.iter().map(|c| c.to_string()).collect()
}

/// Returns the library version.
#[uniffi::export]
pub fn library_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::fs;
    use tempfile::TempDir;

    const RECIPES: &str = indoc! {r#"
        name,ingredients,diet,meal_type,cuisine,prep_time_minutes,cook_time_minutes,image_url
        Chicken Curry,"chicken, onion, spices",Non Vegetarian,Dinner,Indian,15,30,http://x/1.jpg
        Egg Bhurji,"egg, onion, tomato",Eggtarian,Breakfast,Indian,5,10,http://x/3.jpg
    "#};

    #[test]
    fn test_load_and_search() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("recipes.csv");
        fs::write(&path, RECIPES).unwrap();

        let dataset = FfiDataset::load(path.to_str().unwrap().to_string()).unwrap();
        assert_eq!(dataset.len(), 2);

        let results = dataset.search_by_name("curry".to_string());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Chicken Curry");
        assert_eq!(results[0].total_time_minutes, Some(45));
        assert_eq!(results[0].description, None);
    }

    #[test]
    fn test_searches_take_raw_strings() {
        let dataset = FfiDataset::from_csv(RECIPES.to_string()).unwrap();

        assert_eq!(dataset.search_by_ingredients("onion".to_string()).len(), 2);
        assert!(dataset
            .search_by_ingredients("a, b, c, d".to_string())
            .is_empty());
        assert_eq!(
            dataset.search_by_category("breakfast".to_string())[0].name,
            "Egg Bhurji"
        );
        assert!(dataset.search_by_category("Brunch".to_string()).is_empty());
        assert_eq!(
            dataset
                .search_by_filters(
                    "Under 1 Hour".to_string(),
                    "Non Vegetarian".to_string(),
                    "Dinner".to_string(),
                    "Indian".to_string(),
                )
                .len(),
            1
        );
    }

    #[test]
    fn test_sample_errors_cross_boundary() {
        let dataset = FfiDataset::from_csv(RECIPES.to_string()).unwrap();
        assert_eq!(dataset.sample(2).unwrap().len(), 2);
        assert!(matches!(
            dataset.sample(9),
            Err(RecipeFinderError::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_counts_saturate_at_u32_max() {
        assert_eq!(saturating_u32(0), 0);
        assert_eq!(saturating_u32(42), 42);
        assert_eq!(saturating_u32(usize::MAX), u32::MAX);

        let dataset = FfiDataset::from_csv(RECIPES.to_string()).unwrap();
        assert!(matches!(
            dataset.sample(u32::MAX),
            Err(RecipeFinderError::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_unknown_duration_crosses_boundary() {
        let content = indoc! {r#"
            name,ingredients,diet,meal_type,cuisine,prep_time_minutes,cook_time_minutes,image_url
            Toast,bread,Vegetarian,Breakfast,European,,3,http://x/t.jpg
        "#};
        let dataset = FfiDataset::from_csv(content.to_string()).unwrap();
        let toast = &dataset.search_by_name("toast".to_string())[0];
        assert_eq!(toast.prep_time_minutes, None);
        assert_eq!(toast.cook_time_minutes, Some(3));
        assert_eq!(toast.total_time_minutes, None);
    }

    #[test]
    fn test_load_errors_cross_boundary() {
        assert!(matches!(
            FfiDataset::load("/nonexistent/recipes.csv".to_string()),
            Err(RecipeFinderError::IoError { .. })
        ));
        assert!(matches!(
            FfiDataset::from_csv("name,ingredients\nToast,bread\n".to_string()),
            Err(RecipeFinderError::MissingColumn { .. })
        ));
    }

    #[test]
    fn test_vocabularies() {
        assert_eq!(
            categories(),
            vec!["Easy Dinner", "Under 30 Minutes", "Chicken", "Breakfast", "Desserts"]
        );
        assert_eq!(
            difficulties(),
            vec!["Under 1 Hour", "Under 45 Minutes", "Under 30 Minutes"]
        );
        assert_eq!(diets(), vec!["Non Vegetarian", "Vegetarian", "Eggtarian"]);
        assert_eq!(meal_types().len(), 8);
        assert!(cuisines().contains(&"Thai".to_string()));
    }

    #[test]
    fn test_library_version() {
        let version = library_version();
        assert!(!version.is_empty());
        assert_eq!(version, env!("CARGO_PKG_VERSION"));
    }
}
