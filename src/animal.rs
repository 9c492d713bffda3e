//! A single foraging animal and the area record it forages over.
//!
//! The stomach is private on purpose: insertion order is digestion order,
//! and the only way in or out is `eat_food` / `plop`.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A patch of the world an animal can search. Supplied by external callers;
/// only `items` carries a contract, and even that may be absent.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Area {
    #[serde(default)]
    pub terrain: Option<String>,
    #[serde(default)]
    pub safe: bool,
    /// Item identifiers present in this area, in encounter order. `None`
    /// models an area record that simply lacks the field.
    #[serde(default)]
    pub items: Option<Vec<String>>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Animal {
    name: String,
    kind: String,
    /// Owner-mutable; consulted by `find_food`, ignored by `eat_food`.
    pub preferred_foods: Vec<String>,
    #[serde(skip)]
    stomach: VecDeque<String>,
}

impl Animal {
    /// No validation: any name/kind/preferences are accepted as-is.
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        preferred_foods: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            preferred_foods,
            stomach: VecDeque::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The subsequence of `area.items` this animal would eat: original
    /// order, duplicates kept, empty vec when nothing matches. An area
    /// without `items` is an error, not an empty result.
    pub fn find_food(&self, area: &Area) -> Result<Vec<String>, Error> {
        let items = area.items.as_ref().ok_or(Error::MissingField("items"))?;
        Ok(items
            .iter()
            .filter(|item| self.preferred_foods.contains(item))
            .cloned()
            .collect())
    }

    /// Swallow `item`. No preference check; anything goes in.
    pub fn eat_food(&mut self, item: impl Into<String>) {
        self.stomach.push_back(item.into());
    }

    /// Expel the oldest swallowed item. `None` on an empty stomach is the
    /// designed sentinel, never an error, and stays `None` on repeat calls.
    pub fn plop(&mut self) -> Option<String> {
        self.stomach.pop_front()
    }
}
