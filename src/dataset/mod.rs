//! Recipe dataset loading.
//!
//! A [`Dataset`] is read once from CSV and never modified afterwards. Rows
//! without an image reference are dropped while loading, and a row without a
//! name fails the load.

use crate::model::{Recipe, RecipeRow, RecordError};
use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, info, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader};
use thiserror::Error;

mod columns;

/// Errors that can occur when loading a dataset.
#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset is missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid record on line {line}: {source}")]
    InvalidRecord {
        line: u64,
        #[source]
        source: RecordError,
    },
}

/// Returned when more recipes are requested than the dataset holds.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Requested {requested} recipes but the dataset only has {available}")]
pub struct InsufficientDataError {
    pub requested: usize,
    pub available: usize,
}

/// An immutable, ordered collection of recipes.
///
/// Order follows the source file. All search operations borrow from the
/// dataset, so a single instance can back any number of queries.
///
/// # Examples
///
/// ```no_run
/// use recipe_finder::{search_by_name, Dataset};
///
/// let dataset = Dataset::load("Food_Recipe_cleaned.csv")?;
/// let curries = search_by_name(&dataset, "curry");
/// println!("{} curries out of {} recipes", curries.len(), dataset.len());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct Dataset {
    recipes: Vec<Recipe>,
}

impl Dataset {
    /// Loads a dataset from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns `DataLoadError::Io` if the file cannot be opened, and any
    /// error [`Dataset::from_reader`] can return.
    pub fn load<P: AsRef<Utf8Path>>(path: P) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DataLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let dataset = Self::from_reader(BufReader::new(file))?;
        info!("Loaded {} recipes from {}", dataset.len(), path);
        Ok(dataset)
    }

    /// Reads a dataset from CSV text.
    ///
    /// The first row must be a header row containing every required column
    /// (see the column table in the crate documentation); extra columns are
    /// ignored.
    ///
    /// # Errors
    ///
    /// - `DataLoadError::MissingColumn` if a required column is absent
    /// - `DataLoadError::Csv` if the CSV itself is malformed
    /// - `DataLoadError::InvalidRecord` if a row has an empty name
    ///
    /// Blank or unreadable durations do not fail the load: they are logged
    /// and the recipe keeps that duration unknown.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self, DataLoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(reader);
        let headers = columns::canonical_headers(reader.headers()?)?;

        let mut recipes = Vec::new();
        let mut dropped = 0usize;
        let mut issues = Vec::new();

        for result in reader.records() {
            let record = result?;
            let line = record.position().map_or(0, |p| p.line());
            let row: RecipeRow = record.deserialize(Some(&headers))?;

            let recipe = Recipe::from_row(row, &mut issues)
                .map_err(|source| DataLoadError::InvalidRecord { line, source })?;
            for issue in issues.drain(..) {
                warn!("Line {}: {}; treating it as unknown", line, issue);
            }

            match recipe {
                Some(recipe) => recipes.push(recipe),
                None => {
                    debug!("Dropping row on line {}: no image_url", line);
                    dropped += 1;
                }
            }
        }

        if dropped > 0 {
            info!("Dropped {} rows without an image_url", dropped);
        }
        if recipes.is_empty() {
            warn!("Dataset contains no usable recipes");
        }

        Ok(Dataset { recipes })
    }

    /// Picks `n` distinct recipes uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientDataError` if `n` exceeds the dataset size.
    pub fn sample(&self, n: usize) -> Result<Vec<&Recipe>, InsufficientDataError> {
        self.sample_with(n, &mut rand::thread_rng())
    }

    /// Like [`Dataset::sample`], drawing from the given random number generator.
    pub fn sample_with<R: Rng + ?Sized>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<Vec<&Recipe>, InsufficientDataError> {
        if n > self.recipes.len() {
            return Err(InsufficientDataError {
                requested: n,
                available: self.recipes.len(),
            });
        }

        Ok(self.recipes.choose_multiple(rng, n).collect())
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Recipe> {
        self.recipes.get(index)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}
