//! Recipe storage module.
//!
//! This module owns the in-memory recipe collection:
//! - `Recipe` data and the recipes seeded into every session
//! - `RecipeStore`, the append-only ordered collection with its id counter
//! - `Subscription`, the receiving end of store snapshots

mod recipe;

pub use recipe::{seed_recipes, Recipe, RecipeId};

use log::*;
use std::sync::mpsc;
use std::sync::Arc;

/// Immutable view of the recipe sequence at one point in time.
///
pub type Snapshot = Arc<Vec<Recipe>>;

/// Receiving end of the store's publish channel.
///
pub struct Subscription {
    rx: mpsc::Receiver<Snapshot>,
}

impl Subscription {
    /// Drain pending snapshots and return the newest one, if any arrived
    /// since the last call.
    ///
    pub fn latest(&mut self) -> Option<Snapshot> {
        self.rx.try_iter().last()
    }
}

/// Ordered, append-only collection of recipes.
///
/// Every mutation builds a new snapshot and sends it to all live
/// subscribers before returning.
///
pub struct RecipeStore {
    recipes: Snapshot,
    next_id: RecipeId,
    subscribers: Vec<mpsc::Sender<Snapshot>>,
}

impl Default for RecipeStore {
    fn default() -> Self {
        RecipeStore::seeded()
    }
}

impl RecipeStore {
    /// Return a store holding the given recipes, continuing ids after the
    /// largest one present.
    ///
    pub fn new(recipes: Vec<Recipe>) -> Self {
        let next_id = recipes.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        RecipeStore {
            recipes: Arc::new(recipes),
            next_id,
            subscribers: vec![],
        }
    }

    /// Return a store holding the seeded recipes.
    ///
    pub fn seeded() -> Self {
        RecipeStore::new(seed_recipes())
    }

    /// Return the current recipes in insertion order.
    ///
    pub fn list(&self) -> Snapshot {
        Arc::clone(&self.recipes)
    }

    /// Return the recipe with the given id, if present.
    ///
    pub fn get_by_id(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    /// Append a new recipe and publish the resulting snapshot. Returns the
    /// id assigned to the recipe.
    ///
    pub fn add(&mut self, title: String, ingredients: Vec<String>, steps: Vec<String>) -> RecipeId {
        let id = self.next_id;
        self.next_id += 1;
        info!(
            "Adding recipe {} '{}' ({} ingredients, {} steps)",
            id,
            title,
            ingredients.len(),
            steps.len()
        );
        Arc::make_mut(&mut self.recipes).push(Recipe {
            id,
            title,
            ingredients,
            steps,
        });
        self.publish();
        id
    }

    /// Register a new observer. The subscription starts out holding the
    /// current snapshot.
    ///
    pub fn subscribe(&mut self) -> Subscription {
        let (tx, rx) = mpsc::channel();
        // The receiver is alive, so this send cannot fail.
        let _ = tx.send(self.list());
        self.subscribers.push(tx);
        Subscription { rx }
    }

    /// Return the id the next added recipe will receive.
    ///
    pub fn next_id(&self) -> RecipeId {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    fn publish(&mut self) {
        let snapshot = self.list();
        self.subscribers
            .retain(|tx| tx.send(Arc::clone(&snapshot)).is_ok());
        debug!(
            "Published snapshot of {} recipes to {} subscribers",
            snapshot.len(),
            self.subscribers.len()
        );
    }
}
