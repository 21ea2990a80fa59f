//! Recipebook Catalog - an ordered, duplicate-free collection of recipes.
//!
//! # Architecture
//!
//! - **Recipe** ([`recipe`]): the named item stored in the book
//! - **Book** ([`book`]): insertion with a uniqueness check, positional delete
//!   and edit, snapshot reads
//! - **Errors** ([`error`]): catalog-specific error types
//!
//! # Example
//!
//! ```rust
//! use recipebook_catalog::{Recipe, RecipeBook};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut book = RecipeBook::new();
//! assert!(book.add_recipe(Recipe::new("Coffee"))?);
//! assert!(!book.add_recipe(Recipe::new("Coffee"))?);
//! assert!(book.add_recipe(Recipe::new("Tea"))?);
//!
//! assert_eq!(book.delete_recipe(0).as_deref(), Some("Coffee"));
//! assert_eq!(book.recipes()[0].name(), "Tea");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod book;
pub mod error;
pub mod recipe;

// Re-export commonly used types
pub use book::RecipeBook;
pub use error::{CatalogError, Result};
pub use recipe::Recipe;
