//! Request-level operations over a shared cookbook.
//!
//! These are the operations a transport exposes: name parsing, entry creation
//! and recipe summaries. Each one validates its input, touches the cookbook at
//! most once and classifies any failure with an [`ErrorKind`].

use crate::error::{Error, ErrorKind, Result};
use crate::expand::{Expansion, IngredientQuantity};
use crate::name::normalize;
use crate::store::Cookbook;
use crate::validate::validate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Normalized name returned by [`parse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseResponse {
    pub msg: String,
}

/// Flattened view of one recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub name: String,
    pub cook_time: i64,
    pub ingredients: Vec<IngredientQuantity>,
}

impl From<Expansion> for Summary {
    fn from(expansion: Expansion) -> Self {
        Self {
            name: expansion.name,
            cook_time: expansion.cook_time,
            ingredients: expansion.ingredients,
        }
    }
}

/// Normalize the `input` field of a parse payload.
///
/// A missing or non-string `input` is treated as empty and rejected.
pub fn parse(payload: &Value) -> Result<ParseResponse> {
    parse_input(payload.get("input").and_then(Value::as_str))
}

fn parse_input(input: Option<&str>) -> Result<ParseResponse> {
    Ok(ParseResponse {
        msg: normalize(input.unwrap_or(""))?,
    })
}

/// Validate a payload and add the entry it describes.
pub fn create_entry(cookbook: &Cookbook, payload: &Value) -> Result<()> {
    let entry = validate(payload, cookbook)?;
    cookbook.insert(entry)
}

/// Summarize a recipe: total cook time and base ingredient quantities.
pub fn summary(cookbook: &Cookbook, name: &str) -> Result<Summary> {
    if name.trim().is_empty() {
        return Err(Error::invalid_input("name must be a non-empty string"));
    }
    Ok(cookbook.expand(name)?.into())
}

/// A single request against the cookbook.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Request {
    /// Normalize a handwritten name.
    Parse {
        #[serde(default)]
        input: Option<String>,
    },
    /// Create an entry from an untyped payload.
    Entry {
        #[serde(default)]
        entry: Value,
    },
    /// Summarize a recipe by name.
    Summary { name: String },
}

/// Outcome of a [`Request`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Parsed(ParseResponse),
    Created {},
    Summary(Summary),
    Error { error: String, kind: ErrorKind },
}

impl From<Error> for Response {
    fn from(err: Error) -> Self {
        Response::Error {
            kind: err.kind(),
            error: err.to_string(),
        }
    }
}

impl Response {
    /// Check whether the request was rejected.
    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error { .. })
    }
}

/// Apply one request to the cookbook.
pub fn handle(cookbook: &Cookbook, request: &Request) -> Response {
    let result = match request {
        Request::Parse { input } => parse_input(input.as_deref()).map(Response::Parsed),
        Request::Entry { entry } => create_entry(cookbook, entry).map(|()| Response::Created {}),
        Request::Summary { name } => summary(cookbook, name).map(Response::Summary),
    };

    result.unwrap_or_else(Response::from)
}
