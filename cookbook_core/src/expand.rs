//! Recipe expansion into base ingredients.
//!
//! Expansion walks the required items of a recipe depth-first, multiplying the
//! quantity along every edge. Ingredients reached at the leaves are summed into
//! one list in first-seen order and their cook times are scaled by the same
//! multiplier.

use crate::entry::{Entry, Ingredient, Recipe};
use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Default maximum recipe nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Default maximum number of entries visited by one expansion.
pub const DEFAULT_MAX_VISITS: usize = 100_000;

/// Bounds on a single expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandLimits {
    /// Maximum nesting depth below the expanded recipe.
    pub max_depth: usize,
    /// Maximum number of entries visited, counting repeats.
    pub max_visits: usize,
}

impl Default for ExpandLimits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_visits: DEFAULT_MAX_VISITS,
        }
    }
}

/// Total quantity of one base ingredient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientQuantity {
    pub name: String,
    pub quantity: i64,
}

/// Result of expanding one unit of a recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion {
    /// Name of the expanded recipe.
    pub name: String,
    /// Sum of ingredient cook times scaled by their quantities.
    pub cook_time: i64,
    /// Base ingredients in first-seen order.
    pub ingredients: Vec<IngredientQuantity>,
}

/// Expand the recipe `name` found in `entries`.
///
/// Fails with `NotFound` if the recipe or anything it transitively requires is
/// missing, `WrongType` if `name` is an ingredient, and `CycleOrDepthExceeded`
/// if a recipe requires itself or the walk exceeds `limits`. No partial result
/// is returned on failure.
pub fn expand(
    entries: &HashMap<String, Entry>,
    name: &str,
    limits: ExpandLimits,
) -> Result<Expansion> {
    let root = match entries.get(name) {
        None => return Err(Error::not_found(name)),
        Some(Entry::Ingredient(_)) => return Err(Error::wrong_type(name, "recipe", "ingredient")),
        Some(Entry::Recipe(recipe)) => recipe,
    };

    let mut walker = Walker {
        entries,
        limits,
        root: name,
        visits: 0,
        cook_time: 0,
        ingredients: Vec::new(),
        index: HashMap::new(),
    };
    walker.walk(root)?;

    Ok(Expansion {
        name: name.to_string(),
        cook_time: walker.cook_time,
        ingredients: walker.ingredients,
    })
}

/// A recipe on the current path and the position of its next required item.
struct Frame<'a> {
    recipe: &'a Recipe,
    multiplier: i64,
    next: usize,
}

struct Walker<'a> {
    entries: &'a HashMap<String, Entry>,
    limits: ExpandLimits,
    root: &'a str,
    visits: usize,
    cook_time: i64,
    ingredients: Vec<IngredientQuantity>,
    index: HashMap<&'a str, usize>,
}

impl<'a> Walker<'a> {
    /// Depth-first walk over an explicit stack of frames.
    fn walk(&mut self, root: &'a Recipe) -> Result<()> {
        self.count_visit()?;

        let mut stack = vec![Frame {
            recipe: root,
            multiplier: 1,
            next: 0,
        }];
        let mut on_path: HashSet<&'a str> = HashSet::from([root.name()]);

        while let Some(frame) = stack.last_mut() {
            let recipe: &'a Recipe = frame.recipe;
            let Some(item) = recipe.required_items().get(frame.next) else {
                on_path.remove(recipe.name());
                stack.pop();
                continue;
            };
            frame.next += 1;

            let multiplier = frame
                .multiplier
                .checked_mul(item.quantity())
                .ok_or_else(|| Error::quantity_overflow(self.root))?;
            self.count_visit()?;

            let entries = self.entries;
            let entry = entries
                .get(item.name())
                .ok_or_else(|| Error::not_found(item.name()))?;

            match entry {
                Entry::Ingredient(ingredient) => self.add_ingredient(ingredient, multiplier)?,
                Entry::Recipe(sub) => {
                    if on_path.contains(sub.name()) {
                        let mut cycle: Vec<&str> = stack.iter().map(|f| f.recipe.name()).collect();
                        cycle.push(sub.name());
                        return Err(Error::cycle_or_depth(
                            self.root,
                            format!("cycle {}", cycle.join(" -> ")),
                        ));
                    }
                    if stack.len() > self.limits.max_depth {
                        return Err(Error::cycle_or_depth(
                            self.root,
                            format!("nested deeper than {}", self.limits.max_depth),
                        ));
                    }

                    on_path.insert(sub.name());
                    stack.push(Frame {
                        recipe: sub,
                        multiplier,
                        next: 0,
                    });
                }
            }
        }

        Ok(())
    }

    fn count_visit(&mut self) -> Result<()> {
        self.visits += 1;
        if self.visits > self.limits.max_visits {
            return Err(Error::cycle_or_depth(
                self.root,
                format!("visited more than {} entries", self.limits.max_visits),
            ));
        }
        Ok(())
    }

    fn add_ingredient(&mut self, ingredient: &'a Ingredient, multiplier: i64) -> Result<()> {
        let overflow = || Error::quantity_overflow(self.root);

        let cook_time = ingredient
            .cook_time()
            .checked_mul(multiplier)
            .ok_or_else(overflow)?;
        self.cook_time = self.cook_time.checked_add(cook_time).ok_or_else(overflow)?;

        match self.index.get(ingredient.name()) {
            Some(&i) => {
                let total = &mut self.ingredients[i].quantity;
                *total = total.checked_add(multiplier).ok_or_else(overflow)?;
            }
            None => {
                self.index.insert(ingredient.name(), self.ingredients.len());
                self.ingredients.push(IngredientQuantity {
                    name: ingredient.name().to_string(),
                    quantity: multiplier,
                });
            }
        }

        Ok(())
    }
}
