//! Validation of untyped entry payloads.

use crate::entry::{Entry, EntryType, Ingredient, Recipe, RequiredItem};
use crate::error::{Error, Result};
use crate::store::Cookbook;
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Validate a JSON payload into a typed entry.
///
/// The payload is either the entry object itself or an envelope of the form
/// `{"entry": {...}}`. Checks run in a fixed order and the first failure is
/// reported. The cookbook is only read, to reject names that already exist.
pub fn validate(payload: &Value, cookbook: &Cookbook) -> Result<Entry> {
    let object = payload
        .as_object()
        .ok_or_else(|| Error::invalid_input("payload must be an object"))?;
    let object = match object.get("entry") {
        Some(Value::Object(inner)) => inner,
        _ => object,
    };

    let entry_type = match object.get("type") {
        Some(Value::String(t)) => EntryType::parse(t)?,
        _ => return Err(Error::invalid_input("type must be a string")),
    };

    let name = match object.get("name") {
        Some(Value::String(n)) if !n.trim().is_empty() => n.as_str(),
        _ => return Err(Error::invalid_input("name must be a non-empty string")),
    };

    if cookbook.contains(name)? {
        return Err(Error::duplicate_name(name));
    }

    match entry_type {
        EntryType::Ingredient => {
            let cook_time = object
                .get("cookTime")
                .and_then(Value::as_i64)
                .filter(|t| *t >= 0)
                .ok_or_else(|| {
                    Error::invalid_input("cookTime must be an integer greater than or equal to 0")
                })?;
            Ok(Ingredient::new(name, cook_time)?.into())
        }
        EntryType::Recipe => {
            let items = required_items(object)?;
            Ok(Recipe::new(name, items)?.into())
        }
    }
}

fn required_items(object: &Map<String, Value>) -> Result<Vec<RequiredItem>> {
    let raw = object
        .get("requiredItems")
        .and_then(Value::as_array)
        .ok_or_else(|| Error::invalid_input("requiredItems must be a list"))?;

    let mut seen = HashSet::with_capacity(raw.len());
    let mut items = Vec::with_capacity(raw.len());

    for value in raw {
        let item = value
            .as_object()
            .ok_or_else(|| Error::invalid_input("required item must be an object"))?;

        let name = match item.get("name") {
            Some(Value::String(n)) if !n.trim().is_empty() => n.as_str(),
            _ => {
                return Err(Error::invalid_input(
                    "required item name must be a non-empty string",
                ));
            }
        };
        let quantity = item
            .get("quantity")
            .and_then(Value::as_i64)
            .ok_or_else(|| Error::invalid_input("required item quantity must be an integer"))?;

        if !seen.insert(name) {
            return Err(Error::invalid_input(format!(
                "required item {:?} listed more than once",
                name
            )));
        }

        items.push(RequiredItem::new(name, quantity)?);
    }

    Ok(items)
}
