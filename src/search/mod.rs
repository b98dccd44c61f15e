//! Recipe search and filtering.
//!
//! Every function here is a pure query over a borrowed [`Dataset`]: results
//! keep source order and borrow from the dataset. Bad input never fails a
//! search; it is logged and yields an empty result, which callers should
//! present as "no recipes found".

use crate::{Dataset, Recipe};
use log::debug;
use regex::Regex;
use std::sync::OnceLock;

mod model;

pub use model::*;

/// Recipes whose name contains `query`, ignoring case.
///
/// An empty or whitespace-only query matches nothing.
pub fn search_by_name<'a>(dataset: &'a Dataset, query: &str) -> Vec<&'a Recipe> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        debug!("Name search skipped: {}", InvalidInput::EmptyQuery);
        return Vec::new();
    }

    dataset
        .iter()
        .filter(|recipe| recipe.name().to_lowercase().contains(&query))
        .collect()
}

/// Recipes containing every ingredient in a comma-separated list of up to three.
///
/// Ingredient names are matched as case-insensitive substrings of the recipe's
/// ingredient text. An empty list or more than three ingredients matches
/// nothing.
pub fn search_by_ingredients<'a>(dataset: &'a Dataset, ingredient_csv: &str) -> Vec<&'a Recipe> {
    let query = match IngredientQuery::parse(ingredient_csv) {
        Ok(query) => query,
        Err(e) => {
            debug!("Ingredient search skipped: {}", e);
            return Vec::new();
        }
    };

    dataset
        .iter()
        .filter(|recipe| query.matches(recipe.ingredients()))
        .collect()
}

/// Recipes belonging to a category.
///
/// A recipe belongs to a category if any of these hold, checked in order:
/// 1. one of its tags equals a category term
/// 2. its meal type equals a category term
/// 3. its name contains a category term as a whole word
/// 4. the category's time rule: "Under 30 Minutes" accepts any recipe
///    ready within 30 minutes, "Easy Dinner" any dinner ready within 45
///
/// All comparisons ignore case.
pub fn search_by_category(dataset: &Dataset, category: Category) -> Vec<&Recipe> {
    let matcher = CategoryMatcher::new(category);
    dataset
        .iter()
        .filter(|recipe| matcher.matches(recipe))
        .collect()
}

/// Like [`search_by_category`], taking the category label as typed or selected.
///
/// An unknown label matches nothing.
pub fn search_by_category_name<'a>(dataset: &'a Dataset, category: &str) -> Vec<&'a Recipe> {
    match category.parse() {
        Ok(category) => search_by_category(dataset, category),
        Err(e) => {
            debug!("Category search skipped: {}", e);
            Vec::new()
        }
    }
}

/// Recipes passing all four filters at once.
///
/// A recipe passes the difficulty filter only if its total time is known and
/// within the bound. Diet, meal and cuisine compare case-insensitively, with
/// runs of whitespace, `-` and `_` treated as one separator, so a `Main-Course`
/// filter matches `main course`.
pub fn search_by_filters<'a>(dataset: &'a Dataset, filters: &SearchFilters) -> Vec<&'a Recipe> {
    let max_minutes = filters.difficulty.max_total_minutes();
    dataset
        .iter()
        .filter(|recipe| {
            recipe.ready_within(max_minutes)
                && filters.diet.matches(recipe.diet())
                && filters.meal_matches(recipe.meal_type())
                && filters.cuisine_matches(recipe.cuisine())
        })
        .collect()
}

/// Like [`search_by_filters`], taking raw selector values.
///
/// Values are normalised the same way as there. An unknown difficulty or
/// diet, or an empty meal or cuisine, matches nothing.
pub fn search_by_raw_filters<'a>(
    dataset: &'a Dataset,
    difficulty: &str,
    diet: &str,
    meal: &str,
    cuisine: &str,
) -> Vec<&'a Recipe> {
    match SearchFilters::parse(difficulty, diet, meal, cuisine) {
        Ok(filters) => search_by_filters(dataset, &filters),
        Err(e) => {
            debug!("Filter search skipped: {}", e);
            Vec::new()
        }
    }
}

/// Per-category state for category matching.
struct CategoryMatcher {
    category: Category,
    name_pattern: &'static Regex,
}

impl CategoryMatcher {
    fn new(category: Category) -> Self {
        CategoryMatcher {
            category,
            name_pattern: name_pattern(category),
        }
    }

    fn matches(&self, recipe: &Recipe) -> bool {
        let terms = self.category.terms();
        let is_term = |value: &str| {
            let value = value.trim().to_lowercase();
            terms.iter().any(|t| *t == value)
        };

        recipe.tags().into_iter().any(is_term)
            || is_term(recipe.meal_type())
            || self.name_pattern.is_match(recipe.name())
            || self.matches_time_rule(recipe)
    }

    fn matches_time_rule(&self, recipe: &Recipe) -> bool {
        match self.category {
            Category::Under30Minutes => {
                recipe.ready_within(Difficulty::Under30Minutes.max_total_minutes())
            }
            Category::EasyDinner => {
                recipe.meal_type().eq_ignore_ascii_case("dinner")
                    && recipe.ready_within(Difficulty::Under45Minutes.max_total_minutes())
            }
            Category::Chicken | Category::Breakfast | Category::Desserts => false,
        }
    }
}

/// Whole-word, case-insensitive pattern over a category's terms, compiled once.
fn name_pattern(category: Category) -> &'static Regex {
    static PATTERNS: [OnceLock<Regex>; Category::ALL.len()] =
        [const { OnceLock::new() }; Category::ALL.len()];

    PATTERNS[category as usize].get_or_init(|| {
        let alternatives: Vec<String> = category.terms().iter().map(|t| regex::escape(t)).collect();
        Regex::new(&format!(r"(?i)\b(?:{})\b", alternatives.join("|")))
            .expect("escaped literal terms form a valid pattern")
    })
}
