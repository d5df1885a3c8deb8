//src/catalog.rs
use serde::Deserialize;
use serde_json::{Map, Value};

pub const UNTITLED_EXERCISE: &str = "Untitled";
pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub exercises: Vec<String>,
}

/// Exercise names grouped by category, in the order the provider returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

/// One row of the upstream exercise database before grouping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CatalogRecord {
    pub name: Option<String>,
    pub category: Option<String>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn exercise_count(&self) -> usize {
        self.categories.iter().map(|c| c.exercises.len()).sum()
    }

    /// Shapes the `grouped` object of the API response. Category values that are
    /// not arrays are skipped; entries that are not strings become "Untitled".
    pub fn from_json_map(grouped: &Map<String, Value>) -> Self {
        let categories = grouped
            .iter()
            .filter_map(|(name, value)| {
                let Some(entries) = value.as_array() else {
                    tracing::warn!("Skipping category '{}': not a list", name);
                    return None;
                };
                let exercises = entries
                    .iter()
                    .map(|entry| match entry.as_str() {
                        Some(s) if !s.is_empty() => s.to_string(),
                        _ => UNTITLED_EXERCISE.to_string(),
                    })
                    .collect();
                Some(Category {
                    name: name.clone(),
                    exercises,
                })
            })
            .collect();
        Self { categories }
    }

    /// Groups raw records by category, keeping first-seen category order.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = CatalogRecord>,
    {
        let mut categories: Vec<Category> = Vec::new();
        for record in records {
            let name = non_empty_or(record.name, UNTITLED_EXERCISE);
            let category = non_empty_or(record.category, UNCATEGORIZED);
            match categories.iter_mut().find(|c| c.name == category) {
                Some(existing) => existing.exercises.push(name),
                None => categories.push(Category {
                    name: category,
                    exercises: vec![name],
                }),
            }
        }
        Self { categories }
    }
}

fn non_empty_or(value: Option<String>, fallback: &str) -> String {
    value
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}
