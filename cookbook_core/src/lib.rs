//! # Cookbook Core
//!
//! An in-memory recipe book that expands recipes into base ingredients.
//!
//! The cookbook holds two kinds of named entries: ingredients, which have a
//! fixed cook time, and recipes, which require named quantities of other
//! entries. Expanding a recipe flattens its requirement graph into the total
//! cook time and the quantity of every base ingredient needed for one unit.
//!
//! ## Features
//!
//! - Title-case normalization of handwritten names
//! - Strict validation of untyped JSON entry payloads
//! - A shared cookbook safe to use from many threads
//! - Expansion with cycle detection and depth/visit limits
//!
//! ## Example
//!
//! ```
//! use cookbook_core::{Cookbook, service};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cookbook = Cookbook::new();
//!
//! service::create_entry(&cookbook, &json!({"type": "ingredient", "name": "Egg", "cookTime": 3}))?;
//! service::create_entry(&cookbook, &json!({
//!     "type": "recipe",
//!     "name": "Omelette",
//!     "requiredItems": [{"name": "Egg", "quantity": 2}]
//! }))?;
//!
//! let summary = service::summary(&cookbook, "Omelette")?;
//! assert_eq!(summary.cook_time, 6);
//! assert_eq!(summary.ingredients[0].quantity, 2);
//! # Ok(())
//! # }
//! ```

mod entry;
mod error;
mod expand;
mod name;
pub mod service;
mod store;
mod validate;

pub use entry::{Entry, EntryType, Ingredient, Recipe, RequiredItem};
pub use error::{Error, ErrorKind, Result};
pub use expand::{
    DEFAULT_MAX_DEPTH, DEFAULT_MAX_VISITS, ExpandLimits, Expansion, IngredientQuantity, expand,
};
pub use name::normalize;
pub use store::Cookbook;
pub use validate::validate;
