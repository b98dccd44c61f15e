use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The most ingredients a single ingredient search accepts.
pub const MAX_INGREDIENTS: usize = 3;

/// Meal types offered by the filter selectors.
pub const MEAL_TYPES: &[&str] = &[
    "Appetizer",
    "Breakfast",
    "Dessert",
    "Dinner",
    "Lunch",
    "Main Course",
    "Side Dish",
    "Snack",
];

/// Cuisines offered by the filter selectors.
pub const CUISINES: &[&str] = &[
    "Arab",
    "Asian",
    "Bengali",
    "Chinese",
    "European",
    "French",
    "Greek",
    "Indian",
    "Indonesian",
    "Italian",
    "Japanese",
    "Korean",
    "Malaysian",
    "Mexican",
    "Middle Eastern",
    "Tamil Nadu",
    "Thai",
];

/// Problems with user-supplied search input.
///
/// Search functions never return these: they log them and produce an empty
/// result. They surface only from the parsing helpers below.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("Search query is empty")]
    EmptyQuery,

    #[error("No ingredients given")]
    NoIngredients,

    #[error("Too many ingredients: {0} given, at most {max} allowed", max = MAX_INGREDIENTS)]
    TooManyIngredients(usize),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("Unknown diet: {0}")]
    UnknownDiet(String),

    #[error("Filter value for {0} is empty")]
    EmptyFilter(&'static str),
}

/// Lowercases and collapses separators so `Non-Vegetarian`, `non vegetarian`
/// and ` NON  VEGETARIAN ` compare equal.
fn normalize_label(label: &str) -> String {
    label
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The fixed set of browsable recipe categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    EasyDinner,
    Under30Minutes,
    Chicken,
    Breakfast,
    Desserts,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::EasyDinner,
        Category::Under30Minutes,
        Category::Chicken,
        Category::Breakfast,
        Category::Desserts,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::EasyDinner => "Easy Dinner",
            Category::Under30Minutes => "Under 30 Minutes",
            Category::Chicken => "Chicken",
            Category::Breakfast => "Breakfast",
            Category::Desserts => "Desserts",
        }
    }

    /// Lowercase terms looked up in tags, meal type and name.
    pub(crate) fn terms(self) -> &'static [&'static str] {
        match self {
            Category::EasyDinner => &["easy dinner"],
            Category::Under30Minutes => &["under 30 minutes"],
            Category::Chicken => &["chicken"],
            Category::Breakfast => &["breakfast"],
            Category::Desserts => &["desserts", "dessert"],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_label(s);
        Category::ALL
            .into_iter()
            .find(|c| normalize_label(c.label()) == normalized)
            .ok_or_else(|| InvalidInput::UnknownCategory(s.trim().to_string()))
    }
}

/// Difficulty, expressed as an upper bound on total cooking time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Difficulty {
    Under30Minutes,
    Under45Minutes,
    Under1Hour,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Under1Hour,
        Difficulty::Under45Minutes,
        Difficulty::Under30Minutes,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Under1Hour => "Under 1 Hour",
            Difficulty::Under45Minutes => "Under 45 Minutes",
            Difficulty::Under30Minutes => "Under 30 Minutes",
        }
    }

    /// Inclusive bound on prep plus cook time.
    pub fn max_total_minutes(self) -> u32 {
        match self {
            Difficulty::Under1Hour => 60,
            Difficulty::Under45Minutes => 45,
            Difficulty::Under30Minutes => 30,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_label(s);
        Difficulty::ALL
            .into_iter()
            .find(|d| normalize_label(d.label()) == normalized)
            .ok_or_else(|| InvalidInput::UnknownDifficulty(s.trim().to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Diet {
    NonVegetarian,
    Vegetarian,
    Eggtarian,
}

impl Diet {
    pub const ALL: [Diet; 3] = [Diet::NonVegetarian, Diet::Vegetarian, Diet::Eggtarian];

    pub fn label(self) -> &'static str {
        match self {
            Diet::NonVegetarian => "Non Vegetarian",
            Diet::Vegetarian => "Vegetarian",
            Diet::Eggtarian => "Eggtarian",
        }
    }

    /// Whether a recipe's diet tag names this diet.
    pub(crate) fn matches(self, diet: &str) -> bool {
        normalize_label(diet) == normalize_label(self.label())
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Diet {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_label(s);
        Diet::ALL
            .into_iter()
            .find(|d| normalize_label(d.label()) == normalized)
            .ok_or_else(|| InvalidInput::UnknownDiet(s.trim().to_string()))
    }
}

/// A parsed "what's in your kitchen" query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientQuery {
    ingredients: Vec<String>,
}

impl IngredientQuery {
    /// Parses a comma-separated list of up to [`MAX_INGREDIENTS`] names.
    ///
    /// Items are trimmed and lowercased; empty items are ignored.
    pub fn parse(input: &str) -> Result<Self, InvalidInput> {
        let ingredients: Vec<String> = input
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
            .collect();

        match ingredients.len() {
            0 => Err(InvalidInput::NoIngredients),
            n if n > MAX_INGREDIENTS => Err(InvalidInput::TooManyIngredients(n)),
            _ => Ok(IngredientQuery { ingredients }),
        }
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    /// True if every queried ingredient occurs in `text` (case-insensitive).
    pub(crate) fn matches(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        self.ingredients.iter().all(|i| text.contains(i.as_str()))
    }
}

/// Sidebar filters, all of which must hold for a recipe to match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilters {
    pub difficulty: Difficulty,
    pub diet: Diet,
    meal: String,
    cuisine: String,
}

impl SearchFilters {
    /// Meal and cuisine compare case-insensitively, with runs of whitespace,
    /// `-` and `_` treated as one separator.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput::EmptyFilter` if `meal` or `cuisine` has no
    /// words in it.
    pub fn new(
        difficulty: Difficulty,
        diet: Diet,
        meal: impl AsRef<str>,
        cuisine: impl AsRef<str>,
    ) -> Result<Self, InvalidInput> {
        let meal = normalize_label(meal.as_ref());
        if meal.is_empty() {
            return Err(InvalidInput::EmptyFilter("meal"));
        }
        let cuisine = normalize_label(cuisine.as_ref());
        if cuisine.is_empty() {
            return Err(InvalidInput::EmptyFilter("cuisine"));
        }

        Ok(SearchFilters {
            difficulty,
            diet,
            meal,
            cuisine,
        })
    }

    /// Builds filters from raw selector values.
    pub fn parse(
        difficulty: &str,
        diet: &str,
        meal: &str,
        cuisine: &str,
    ) -> Result<Self, InvalidInput> {
        SearchFilters::new(difficulty.parse()?, diet.parse()?, meal, cuisine)
    }

    pub(crate) fn meal_matches(&self, meal_type: &str) -> bool {
        normalize_label(meal_type) == self.meal
    }

    pub(crate) fn cuisine_matches(&self, cuisine: &str) -> bool {
        normalize_label(cuisine) == self.cuisine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>().unwrap(), category);
        }
        assert_eq!(
            "  under 30 MINUTES ".parse::<Category>().unwrap(),
            Category::Under30Minutes
        );
        assert_eq!(
            "Lunch".parse::<Category>(),
            Err(InvalidInput::UnknownCategory("Lunch".to_string()))
        );
    }

    #[test]
    fn test_difficulty_thresholds_are_ordered() {
        assert_eq!("under 1 hour".parse(), Ok(Difficulty::Under1Hour));
        assert!(
            Difficulty::Under30Minutes.max_total_minutes()
                < Difficulty::Under45Minutes.max_total_minutes()
        );
        assert!(
            Difficulty::Under45Minutes.max_total_minutes()
                < Difficulty::Under1Hour.max_total_minutes()
        );
        assert!("Under 2 Hours".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_diet_parsing_and_matching() {
        assert_eq!("non-vegetarian".parse(), Ok(Diet::NonVegetarian));
        assert_eq!("EGGTARIAN".parse(), Ok(Diet::Eggtarian));
        assert!("Vegan".parse::<Diet>().is_err());

        assert!(Diet::NonVegetarian.matches("Non Vegetarian"));
        assert!(Diet::Vegetarian.matches(" vegetarian "));
        assert!(!Diet::Vegetarian.matches("Non Vegetarian"));
        assert!(!Diet::Vegetarian.matches("High Protein Vegetarian"));
    }

    #[test]
    fn test_ingredient_query_parse() {
        let query = IngredientQuery::parse(" Chicken ,onion,, ").unwrap();
        assert_eq!(query.ingredients(), ["chicken", "onion"]);

        assert_eq!(IngredientQuery::parse(""), Err(InvalidInput::NoIngredients));
        assert_eq!(IngredientQuery::parse(" , ,"), Err(InvalidInput::NoIngredients));
        assert_eq!(
            IngredientQuery::parse("a,b,c,d"),
            Err(InvalidInput::TooManyIngredients(4))
        );
    }

    #[test]
    fn test_ingredient_query_matches_all() {
        let query = IngredientQuery::parse("onion, CHICKEN").unwrap();
        assert!(query.matches("Chicken, onion, spices"));
        assert!(!query.matches("onion, tomato"));
    }

    #[test]
    fn test_search_filters_parse() {
        let filters =
            SearchFilters::parse("Under 45 Minutes", "Vegetarian", "main course", " Indian ")
                .unwrap();
        assert_eq!(filters.difficulty, Difficulty::Under45Minutes);
        assert_eq!(filters.diet, Diet::Vegetarian);
        assert!(filters.meal_matches("Main Course"));
        assert!(filters.cuisine_matches("indian"));
        assert!(!filters.cuisine_matches("South Indian"));

        assert_eq!(
            SearchFilters::parse("Under 1 Hour", "Vegetarian", " ", "Indian"),
            Err(InvalidInput::EmptyFilter("meal"))
        );
        assert!(matches!(
            SearchFilters::parse("Quick", "Vegetarian", "Dinner", "Indian"),
            Err(InvalidInput::UnknownDifficulty(_))
        ));
    }

    #[test]
    fn test_search_filters_new_rejects_empty_values() {
        assert_eq!(
            SearchFilters::new(Difficulty::Under1Hour, Diet::Vegetarian, "", "Indian"),
            Err(InvalidInput::EmptyFilter("meal"))
        );
        assert_eq!(
            SearchFilters::new(Difficulty::Under1Hour, Diet::Vegetarian, "Dinner", " - _ "),
            Err(InvalidInput::EmptyFilter("cuisine"))
        );
        assert_eq!(
            SearchFilters::new(Difficulty::Under1Hour, Diet::Vegetarian, "Dinner", "Indian"),
            SearchFilters::parse("under 1 hour", "vegetarian", "dinner", "INDIAN")
        );
    }

    #[test]
    fn test_search_filters_separators() {
        let filters =
            SearchFilters::new(Difficulty::Under1Hour, Diet::Vegetarian, "main-course", "South_Indian")
                .unwrap();
        assert!(filters.meal_matches("Main Course"));
        assert!(filters.cuisine_matches("south  indian"));
        assert!(!filters.cuisine_matches("southindian"));
    }

    #[test]
    fn test_vocabularies() {
        assert_eq!(MEAL_TYPES.len(), 8);
        assert!(CUISINES.contains(&"Middle Eastern"));
    }
}
