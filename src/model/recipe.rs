use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single recipe row from a dataset.
///
/// Recipes are only created by the dataset loader, which guarantees that
/// `name` and `image_url` are non-empty. A duration the source left blank or
/// unreadable is `None`; such a recipe never passes a time limit.
///
/// # Examples
///
/// ```no_run
/// use recipe_finder::Dataset;
///
/// let dataset = Dataset::load("Food_Recipe_cleaned.csv")?;
/// for recipe in dataset.iter().take(3) {
///     if let Some(minutes) = recipe.total_time_minutes() {
///         println!("{} ({} min)", recipe.name(), minutes);
///     }
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipe {
    name: String,
    ingredients: String,
    category: String,
    diet: String,
    meal_type: String,
    cuisine: String,
    prep_time_minutes: Option<u32>,
    cook_time_minutes: Option<u32>,
    image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    instructions: Option<String>,
}

/// A raw CSV row, keyed by canonical column names.
///
/// Every field is optional here so that validation can report which row and
/// which value was wrong instead of a generic deserialisation failure.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RecipeRow {
    pub name: Option<String>,
    pub ingredients: Option<String>,
    pub category: Option<String>,
    pub diet: Option<String>,
    pub meal_type: Option<String>,
    pub cuisine: Option<String>,
    pub prep_time_minutes: Option<String>,
    pub cook_time_minutes: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub instructions: Option<String>,
}

/// A problem with a single row.
///
/// `EmptyName` makes the row unusable; duration problems only leave that
/// duration unknown.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("recipe name is empty")]
    EmptyName,

    #[error("{column} is missing")]
    MissingDuration { column: &'static str },

    #[error("{column} is not a non-negative number of minutes: {value:?}")]
    InvalidDuration { column: &'static str, value: String },
}

impl Recipe {
    /// Validates a raw row.
    ///
    /// Returns `Ok(None)` for rows without an image reference, which the
    /// dataset drops silently. Unreadable durations are recorded in `issues`
    /// and stored as unknown.
    pub(crate) fn from_row(
        row: RecipeRow,
        issues: &mut Vec<RecordError>,
    ) -> Result<Option<Self>, RecordError> {
        let image_url = match non_empty(row.image_url) {
            Some(url) => url,
            None => return Ok(None),
        };
        let name = non_empty(row.name).ok_or(RecordError::EmptyName)?;
        let mut minutes = |column: &'static str, value: Option<String>| {
            parse_minutes(column, value)
                .map_err(|e| issues.push(e))
                .ok()
        };
        let prep_time_minutes = minutes("prep_time_minutes", row.prep_time_minutes);
        let cook_time_minutes = minutes("cook_time_minutes", row.cook_time_minutes);

        Ok(Some(Recipe {
            name,
            ingredients: trimmed(row.ingredients),
            category: trimmed(row.category),
            diet: trimmed(row.diet),
            meal_type: trimmed(row.meal_type),
            cuisine: trimmed(row.cuisine),
            prep_time_minutes,
            cook_time_minutes,
            image_url,
            description: non_empty(row.description),
            instructions: non_empty(row.instructions),
        }))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw ingredient text as it appears in the source.
    pub fn ingredients(&self) -> &str {
        &self.ingredients
    }

    /// Ingredient names split on commas, trimmed, without empty entries.
    pub fn ingredient_list(&self) -> Vec<&str> {
        split_list(&self.ingredients)
    }

    /// The raw category/tag column. Empty when the source had none.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Category tags split on commas, trimmed, without empty entries.
    pub fn tags(&self) -> Vec<&str> {
        split_list(&self.category)
    }

    pub fn diet(&self) -> &str {
        &self.diet
    }

    pub fn meal_type(&self) -> &str {
        &self.meal_type
    }

    pub fn cuisine(&self) -> &str {
        &self.cuisine
    }

    pub fn prep_time_minutes(&self) -> Option<u32> {
        self.prep_time_minutes
    }

    pub fn cook_time_minutes(&self) -> Option<u32> {
        self.cook_time_minutes
    }

    /// Preparation plus cooking time, if both are known.
    pub fn total_time_minutes(&self) -> Option<u32> {
        Some(self.prep_time_minutes?.saturating_add(self.cook_time_minutes?))
    }

    /// True if the total time is known and at most `max_minutes`.
    pub fn ready_within(&self, max_minutes: u32) -> bool {
        self.total_time_minutes().is_some_and(|t| t <= max_minutes)
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn instructions(&self) -> Option<&str> {
        self.instructions.as_deref()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn trimmed(value: Option<String>) -> String {
    non_empty(value).unwrap_or_default()
}

fn split_list(value: &str) -> Vec<&str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Durations may be written as decimals (`15.0`); they are rounded to whole minutes.
fn parse_minutes(column: &'static str, value: Option<String>) -> Result<u32, RecordError> {
    let raw = non_empty(value).ok_or(RecordError::MissingDuration { column })?;
    match raw.parse::<f64>() {
        Ok(minutes) if minutes.is_finite() && minutes >= 0.0 && minutes <= u32::MAX as f64 => {
            Ok(minutes.round() as u32)
        }
        _ => Err(RecordError::InvalidDuration { column, value: raw }),
    }
}
