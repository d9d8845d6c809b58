//! Cookbook entries: ingredients and recipes.

use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Kind of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// A base ingredient (leaf).
    Ingredient,
    /// A recipe built from other entries.
    Recipe,
}

impl EntryType {
    /// Wire name of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            EntryType::Ingredient => "ingredient",
            EntryType::Recipe => "recipe",
        }
    }

    /// Parse from the wire name.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "ingredient" => Ok(EntryType::Ingredient),
            "recipe" => Ok(EntryType::Recipe),
            _ => Err(Error::invalid_input(format!(
                "type must be \"recipe\" or \"ingredient\", got {:?}",
                value
            ))),
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A base ingredient with a fixed cook time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    name: String,
    cook_time: i64,
}

/// A named quantity of another entry required by a recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredItem {
    name: String,
    quantity: i64,
}

impl RequiredItem {
    /// Create a new required item.
    pub fn new(name: impl Into<String>, quantity: i64) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::invalid_input("required item name cannot be empty"));
        }
        Ok(Self { name, quantity })
    }

    /// Name of the required entry.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Units of the entry required. May be zero or negative.
    pub fn quantity(&self) -> i64 {
        self.quantity
    }
}

/// A recipe: an ordered list of required items.
///
/// Item names are unique within one recipe. They are references by name and
/// need not exist in the cookbook until the recipe is expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    name: String,
    required_items: Vec<RequiredItem>,
}

impl Recipe {
    /// Create a new recipe, rejecting repeated item names.
    pub fn new(name: impl Into<String>, required_items: Vec<RequiredItem>) -> Result<Self> {
        let name = name.into();
        check_name(&name)?;

        let mut seen = HashSet::with_capacity(required_items.len());
        for item in &required_items {
            if !seen.insert(item.name.as_str()) {
                return Err(Error::invalid_input(format!(
                    "required item {:?} listed more than once",
                    item.name
                )));
            }
        }

        Ok(Self {
            name,
            required_items,
        })
    }

    /// Name of the recipe.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Required items in declaration order.
    pub fn required_items(&self) -> &[RequiredItem] {
        &self.required_items
    }
}

impl Ingredient {
    /// Create a new ingredient. The cook time cannot be negative.
    pub fn new(name: impl Into<String>, cook_time: i64) -> Result<Self> {
        let name = name.into();
        check_name(&name)?;
        if cook_time < 0 {
            return Err(Error::invalid_input(format!(
                "cookTime must be greater than or equal to 0, got {}",
                cook_time
            )));
        }
        Ok(Self { name, cook_time })
    }

    /// Name of the ingredient.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cook time of one unit.
    pub fn cook_time(&self) -> i64 {
        self.cook_time
    }
}

/// An entry in the cookbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Ingredient(Ingredient),
    Recipe(Recipe),
}

impl Entry {
    /// Name of the entry.
    pub fn name(&self) -> &str {
        match self {
            Entry::Ingredient(ingredient) => ingredient.name(),
            Entry::Recipe(recipe) => recipe.name(),
        }
    }

    /// Kind of the entry.
    pub fn entry_type(&self) -> EntryType {
        match self {
            Entry::Ingredient(_) => EntryType::Ingredient,
            Entry::Recipe(_) => EntryType::Recipe,
        }
    }
}

impl From<Ingredient> for Entry {
    fn from(ingredient: Ingredient) -> Self {
        Entry::Ingredient(ingredient)
    }
}

impl From<Recipe> for Entry {
    fn from(recipe: Recipe) -> Self {
        Entry::Recipe(recipe)
    }
}

fn check_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::invalid_input("name cannot be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_type_parse() {
        assert_eq!(EntryType::parse("recipe").unwrap(), EntryType::Recipe);
        assert_eq!(EntryType::parse("ingredient").unwrap(), EntryType::Ingredient);
        assert!(EntryType::parse("Recipe").is_err());
        assert!(EntryType::parse("").is_err());
    }

    #[test]
    fn test_recipe_rejects_repeated_items() {
        let items = vec![
            RequiredItem::new("Egg", 1).unwrap(),
            RequiredItem::new("Egg", 2).unwrap(),
        ];
        assert!(Recipe::new("Omelette", items).is_err());
    }

    #[test]
    fn test_recipe_keeps_item_order() {
        let items = vec![
            RequiredItem::new("Rice", 1).unwrap(),
            RequiredItem::new("Egg", 2).unwrap(),
        ];
        let recipe = Recipe::new("Fried Rice", items).unwrap();
        let names: Vec<&str> = recipe
            .required_items()
            .iter()
            .map(RequiredItem::name)
            .collect();
        assert_eq!(names, ["Rice", "Egg"]);
    }

    #[test]
    fn test_blank_names_rejected() {
        assert!(Ingredient::new("   ", 1).is_err());
        assert!(Recipe::new("", vec![]).is_err());
        assert!(RequiredItem::new(" \t", 1).is_err());
    }

    #[test]
    fn test_ingredient_rejects_negative_cook_time() {
        assert!(Ingredient::new("Egg", -1).is_err());
        let egg = Ingredient::new("Egg", 0).unwrap();
        assert_eq!(egg.name(), "Egg");
        assert_eq!(egg.cook_time(), 0);
    }

    #[test]
    fn test_required_item_accessors() {
        let item = RequiredItem::new("Egg", -3).unwrap();
        assert_eq!(item.name(), "Egg");
        assert_eq!(item.quantity(), -3);
    }

    #[test]
    fn test_entry_accessors() {
        let entry: Entry = Ingredient::new("Egg", 3).unwrap().into();
        assert_eq!(entry.name(), "Egg");
        assert_eq!(entry.entry_type(), EntryType::Ingredient);
        assert_eq!(entry.entry_type().to_string(), "ingredient");
    }
}
