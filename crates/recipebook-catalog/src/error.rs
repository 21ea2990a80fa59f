//! Error types for the catalog.

use recipebook_core::RecipeBookError;
use thiserror::Error;

/// Errors that can occur in catalog operations.
///
/// An out-of-range index is not an error: positional operations report it as
/// `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The recipe offered to the book violates its preconditions
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

impl From<CatalogError> for RecipeBookError {
    fn from(err: CatalogError) -> Self {
        RecipeBookError::Catalog(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_core_error() {
        let err: RecipeBookError =
            CatalogError::InvalidArgument("recipe name must not be empty".to_string()).into();
        assert_eq!(
            err.to_string(),
            "catalog error: invalid argument: recipe name must not be empty"
        );
    }
}
