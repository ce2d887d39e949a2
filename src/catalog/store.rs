//! Catalog Store
//!
//! One mutex-guarded id -> entity map per content type. Handlers go through
//! these methods only, so a persistent backend could replace the map without
//! touching handler logic.

use std::collections::HashMap;
use std::sync::Mutex;

use super::types::{fresh_id, Keyed};
use crate::learning::StoreError;

/// In-memory keyed store for one catalog
pub struct Catalog<T> {
    items: Mutex<HashMap<String, T>>,
    /// Catalog name used in error messages ("course", "article", ...)
    label: &'static str,
}

impl<T: Keyed + Clone> Catalog<T> {
    /// Build a catalog from seed entities. Seed ids are kept as-is.
    pub fn seeded(label: &'static str, seed: Vec<T>) -> Self {
        let items = seed
            .into_iter()
            .map(|item| (item.key().to_string(), item))
            .collect();
        Self {
            items: Mutex::new(items),
            label,
        }
    }

    /// All entities, sorted by id for stable output
    pub fn list(&self) -> Vec<T> {
        let items = self.items.lock().unwrap();
        let mut all: Vec<T> = items.values().cloned().collect();
        all.sort_by(|a, b| a.key().cmp(b.key()));
        all
    }

    pub fn get(&self, id: &str) -> Option<T> {
        self.items.lock().unwrap().get(id).cloned()
    }

    /// Insert a new entity, assigning a fresh uuid when the client sent none
    pub fn create(&self, mut item: T) -> T {
        if item.key().is_empty() {
            item.assign_key(fresh_id());
        }
        let mut items = self.items.lock().unwrap();
        items.insert(item.key().to_string(), item.clone());
        item
    }

    /// Replace an existing entity. The path id wins over any id in the body.
    pub fn update(&self, id: &str, mut item: T) -> Result<T, StoreError> {
        let mut items = self.items.lock().unwrap();
        if !items.contains_key(id) {
            return Err(StoreError::NotFound(format!("{} {}", self.label, id)));
        }
        item.assign_key(id.to_string());
        items.insert(id.to_string(), item.clone());
        Ok(item)
    }

    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut items = self.items.lock().unwrap();
        match items.remove(id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(format!("{} {}", self.label, id))),
        }
    }

    pub fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
