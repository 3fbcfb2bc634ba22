//! Category configuration loading from config.toml
//!
//! The category set is a fixed, ordered list of category names, each paired with the display
//! color used for it in breakdowns. It is loaded once at startup; when no configuration file is
//! present the built-in default set is used.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Color used for a breakdown entry whose category is not in the set.
pub const FALLBACK_COLOR: &str = "#000000";

const DEFAULT_CATEGORIES: [(&str, &str); 10] = [
    ("Food", "#1FB8CD"),
    ("Transportation", "#FFC185"),
    ("Housing", "#B4413C"),
    ("Utilities", "#ECEBD5"),
    ("Entertainment", "#5D878F"),
    ("Healthcare", "#DB4545"),
    ("Shopping", "#D2BA4C"),
    ("Travel", "#964325"),
    ("Education", "#944454"),
    ("Other", "#13343B"),
];

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Categories in display order
    pub categories: Vec<CategoryConfig>,
}

/// Configuration for a single category
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CategoryConfig {
    /// Name of the category, matched exactly against expense categories
    pub name: String,
    /// Display color as `#RRGGBB`
    pub color: String,
}

/// The validated, ordered set of categories an expense may belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySet {
    categories: Vec<CategoryConfig>,
}

impl CategorySet {
    /// Builds a category set, rejecting empty sets, blank or duplicate names and malformed colors.
    pub fn new(categories: Vec<CategoryConfig>) -> Result<Self> {
        if categories.is_empty() {
            return Err(Error::Config {
                message: "At least one category must be configured".to_string(),
            });
        }

        for (index, category) in categories.iter().enumerate() {
            if category.name.trim().is_empty() {
                return Err(Error::Config {
                    message: format!("Category #{} has an empty name", index + 1),
                });
            }
            if categories[..index].iter().any(|c| c.name == category.name) {
                return Err(Error::Config {
                    message: format!("Category '{}' is configured twice", category.name),
                });
            }
            if !is_hex_color(&category.color) {
                return Err(Error::Config {
                    message: format!(
                        "Category '{}' has invalid color '{}', expected #RRGGBB",
                        category.name, category.color
                    ),
                });
            }
        }

        Ok(Self { categories })
    }

    /// Returns true if `name` is one of the configured categories.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c.name == name)
    }

    /// Display color for `name`, or [`FALLBACK_COLOR`] when the category is unknown.
    #[must_use]
    pub fn color_of(&self, name: &str) -> &str {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map_or(FALLBACK_COLOR, |c| c.color.as_str())
    }

    /// Category names in configured order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// All categories in configured order.
    #[must_use]
    pub fn as_slice(&self) -> &[CategoryConfig] {
        &self.categories
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES
                .iter()
                .map(|(name, color)| CategoryConfig {
                    name: (*name).to_string(),
                    color: (*color).to_string(),
                })
                .collect(),
        }
    }
}

fn is_hex_color(color: &str) -> bool {
    color
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

/// Parses and validates a category set from TOML text.
pub fn parse_config(contents: &str) -> Result<CategorySet> {
    let config: Config = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })?;
    CategorySet::new(config.categories)
}

/// Loads the category set from a TOML file
///
/// # Returns
/// * `Ok(CategorySet)` - Parsed set, or the default set if `path` does not exist
/// * `Err(Error)` - The file exists but could not be read, parsed or validated
pub fn load_categories<P: AsRef<Path>>(path: P) -> Result<CategorySet> {
    let path = path.as_ref();
    if !path.exists() {
        info!(
            "No category config at {}, using the default categories",
            path.display()
        );
        return Ok(CategorySet::default());
    }

    debug!("Loading categories from {}", path.display());
    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path.display()),
    })?;
    let categories = parse_config(&contents)?;
    info!("Loaded {} categories", categories.len());
    Ok(categories)
}
