//! Ordered, duplicate-free recipe collection.

use crate::{
    error::{CatalogError, Result},
    recipe::Recipe,
};
use tracing::{debug, warn};

/// An ordered collection of recipes with unique names.
///
/// Recipes keep their insertion order. Removing a recipe shifts every later
/// recipe one position toward the front, so positions are always dense in
/// `0..len()`.
///
/// Uniqueness is enforced on insertion only: [`edit_recipe`] replaces in place
/// without comparing the replacement against the rest of the book.
///
/// [`edit_recipe`]: RecipeBook::edit_recipe
#[derive(Debug, Clone, Default)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
}

impl RecipeBook {
    /// Create an empty recipe book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a recipe to the end of the book.
    ///
    /// Returns `Ok(false)` without modifying the book when a recipe with the
    /// same name (exact, case-sensitive) is already present.
    ///
    /// # Errors
    /// Returns `CatalogError::InvalidArgument` if the recipe name is empty.
    pub fn add_recipe(&mut self, recipe: Recipe) -> Result<bool> {
        if recipe.name().is_empty() {
            warn!("rejected recipe with empty name");
            return Err(CatalogError::InvalidArgument(
                "recipe name must not be empty".to_string(),
            ));
        }

        if self.recipes.iter().any(|r| r.name() == recipe.name()) {
            debug!(name = %recipe.name(), "duplicate recipe not added");
            return Ok(false);
        }

        debug!(name = %recipe.name(), index = self.recipes.len(), "added recipe");
        self.recipes.push(recipe);
        Ok(true)
    }

    /// Remove the recipe at `index`, returning its name.
    ///
    /// Returns `None` if `index` is out of bounds.
    pub fn delete_recipe(&mut self, index: usize) -> Option<String> {
        if index >= self.recipes.len() {
            debug!(index, len = self.recipes.len(), "no recipe to delete");
            return None;
        }

        let removed = self.recipes.remove(index);
        debug!(name = %removed.name(), index, len = self.recipes.len(), "deleted recipe");
        Some(removed.into_name())
    }

    /// Replace the recipe at `index`, returning the name it had before.
    ///
    /// Returns `None` if `index` is out of bounds.
    pub fn edit_recipe(&mut self, index: usize, recipe: Recipe) -> Option<String> {
        let Some(slot) = self.recipes.get_mut(index) else {
            debug!(index, len = self.recipes.len(), "no recipe to edit");
            return None;
        };

        let previous = std::mem::replace(slot, recipe);
        debug!(from = %previous.name(), to = %slot.name(), index, "edited recipe");
        Some(previous.into_name())
    }

    /// Borrow the recipes in order.
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Copy the recipes in order.
    ///
    /// The returned vector is detached from the book.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Recipe> {
        self.recipes.clone()
    }

    /// Get the number of recipes in the book.
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Check if the book holds no recipes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(book: &RecipeBook) -> Vec<&str> {
        book.recipes().iter().map(Recipe::name).collect()
    }

    fn book_with(names: &[&str]) -> RecipeBook {
        let mut book = RecipeBook::new();
        for name in names {
            assert!(book.add_recipe(Recipe::new(*name)).expect("add recipe"));
        }
        book
    }

    #[test]
    fn test_new_book_is_empty() {
        let book = RecipeBook::new();
        assert!(book.is_empty());
        assert_eq!(book.len(), 0);
        assert!(book.snapshot().is_empty());
    }

    #[test]
    fn test_add_recipes() {
        let mut book = RecipeBook::new();
        assert!(book.add_recipe(Recipe::new("Coffee")).expect("add Coffee"));
        assert!(book.add_recipe(Recipe::new("Tea")).expect("add Tea"));
        assert!(book.add_recipe(Recipe::new("Latte")).expect("add Latte"));
        assert_eq!(names(&book), ["Coffee", "Tea", "Latte"]);
    }

    #[test]
    fn test_add_duplicate_recipe() {
        let mut book = book_with(&["Coffee"]);
        assert!(!book.add_recipe(Recipe::new("Coffee")).expect("add duplicate"));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_duplicate_check_is_case_sensitive() {
        let mut book = book_with(&["Coffee"]);
        assert!(book.add_recipe(Recipe::new("coffee")).expect("add lowercase"));
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_add_empty_name() {
        let mut book = RecipeBook::new();
        let result = book.add_recipe(Recipe::new(""));
        assert!(matches!(result, Err(CatalogError::InvalidArgument(_))));
        assert!(book.is_empty());
    }

    #[test]
    fn test_whitespace_name_is_not_empty() {
        let mut book = RecipeBook::new();
        assert!(book.add_recipe(Recipe::new(" ")).expect("add whitespace name"));
    }

    #[test]
    fn test_delete_recipe() {
        let mut book = book_with(&["Coffee"]);
        assert_eq!(book.delete_recipe(0).as_deref(), Some("Coffee"));
        assert_eq!(book.delete_recipe(0), None);
    }

    #[test]
    fn test_delete_from_empty_book() {
        let mut book = RecipeBook::new();
        assert_eq!(book.delete_recipe(0), None);
    }

    #[test]
    fn test_delete_shifts_later_recipes() {
        let mut book = book_with(&["Coffee", "Tea", "Latte", "Mocha"]);
        assert_eq!(book.delete_recipe(1).as_deref(), Some("Tea"));
        assert_eq!(names(&book), ["Coffee", "Latte", "Mocha"]);
    }

    #[test]
    fn test_delete_last_position() {
        let mut book = book_with(&["Coffee", "Tea"]);
        assert_eq!(book.delete_recipe(2), None);
        assert_eq!(book.delete_recipe(1).as_deref(), Some("Tea"));
        assert_eq!(names(&book), ["Coffee"]);
    }

    #[test]
    fn test_deleted_name_can_be_added_again() {
        let mut book = book_with(&["Coffee", "Tea"]);
        book.delete_recipe(0);
        assert!(book.add_recipe(Recipe::new("Coffee")).expect("re-add Coffee"));
        assert_eq!(names(&book), ["Tea", "Coffee"]);
    }

    #[test]
    fn test_edit_recipe() {
        let mut book = book_with(&["Coffee"]);
        assert_eq!(
            book.edit_recipe(0, Recipe::new("Espresso")).as_deref(),
            Some("Coffee")
        );
        assert_eq!(book.recipes()[0].name(), "Espresso");
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_edit_keeps_other_positions() {
        let mut book = book_with(&["Coffee", "Tea", "Latte"]);
        book.edit_recipe(1, Recipe::new("Chai"));
        assert_eq!(names(&book), ["Coffee", "Chai", "Latte"]);
    }

    #[test]
    fn test_edit_out_of_bounds() {
        let mut book = RecipeBook::new();
        assert_eq!(book.edit_recipe(0, Recipe::new("Espresso")), None);
        assert_eq!(book.edit_recipe(99, Recipe::new("Espresso")), None);
        assert!(book.is_empty());
    }

    #[test]
    fn test_edit_does_not_check_uniqueness() {
        let mut book = book_with(&["Coffee", "Tea"]);
        assert_eq!(
            book.edit_recipe(1, Recipe::new("Coffee")).as_deref(),
            Some("Tea")
        );
        assert_eq!(names(&book), ["Coffee", "Coffee"]);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut book = book_with(&["Coffee", "Tea"]);
        let mut snapshot = book.snapshot();
        snapshot[0].set_name("Tampered");
        snapshot.clear();

        assert_eq!(names(&book), ["Coffee", "Tea"]);

        book.delete_recipe(0);
        let snapshot = book.snapshot();
        assert_eq!(snapshot, vec![Recipe::new("Tea")]);
    }
}
