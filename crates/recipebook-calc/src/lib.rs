//! Recipebook Calc - stateless arithmetic helpers and product pricing.
//!
//! - [`arithmetic`] - sum, product, quotient and factorial over machine integers
//! - [`pricing`] - products with a bounded percentage discount
//! - [`error`] - error types for both
//!
//! # Example
//!
//! ```rust
//! use recipebook_calc::{arithmetic, Product};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! assert_eq!(arithmetic::add(&[1, 2, 3]), 6);
//! assert_eq!(arithmetic::factorial(5)?, 120);
//!
//! let mut laptop = Product::new("Laptop", 1000.0)?;
//! laptop.apply_discount(20.0)?;
//! assert!((laptop.final_price() - 800.0).abs() < 1e-9);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod arithmetic;
pub mod error;
pub mod pricing;

// Re-export commonly used types
pub use error::{CalcError, CalcResult, PricingError, PricingResult};
pub use pricing::Product;
