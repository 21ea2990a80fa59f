//! The catalog item type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named recipe.
///
/// Construction performs no validation; [`RecipeBook::add_recipe`] rejects
/// recipes with an empty name.
///
/// [`RecipeBook::add_recipe`]: crate::RecipeBook::add_recipe
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Recipe {
    name: String,
}

impl Recipe {
    /// Create a recipe with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Get the recipe name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the recipe name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Consume the recipe, returning its name.
    #[must_use]
    pub fn into_name(self) -> String {
        self.name
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
