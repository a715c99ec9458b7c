use crate::error::{RentifyError, Result};
use crate::models::{seed, Owner, Property};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

/// In-memory listing collection, most recently added first.
///
/// Every mutation returns a new snapshot and leaves `self` untouched, so a
/// filtered view computed from an older snapshot stays valid.
#[derive(Debug, Clone, Default)]
pub struct PropertyStore {
    properties: Arc<Vec<Property>>,
}

impl PropertyStore {
    pub fn new(properties: Vec<Property>) -> Self {
        Self {
            properties: Arc::new(properties),
        }
    }

    /// Store holding the static fixture listings
    pub fn seeded() -> Self {
        let store = Self::new(seed::properties());
        info!("📋 Seeded property store with {} listings", store.len());
        store
    }

    pub fn as_slice(&self) -> &[Property] {
        &self.properties
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Property> {
        self.properties.iter()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn find(&self, id: &str) -> Result<&Property> {
        self.properties
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| RentifyError::not_found("property", id))
    }

    /// Insert at the front. Id uniqueness is the caller's job.
    pub fn append(&self, property: Property) -> Self {
        debug!("Adding listing {} to store", property.id);
        let mut next = Vec::with_capacity(self.len() + 1);
        next.push(property);
        next.extend(self.properties.iter().cloned());
        Self::new(next)
    }

    /// Drop every entry whose id matches
    pub fn remove(&self, id: &str) -> Self {
        let next: Vec<Property> = self
            .properties
            .iter()
            .filter(|p| p.id != id)
            .cloned()
            .collect();
        debug!("Removed {} listing(s) with id {}", self.len() - next.len(), id);
        Self::new(next)
    }

    pub fn set_featured(&self, id: &str, featured: bool) -> Result<Self> {
        self.update(id, |p| p.featured = featured)
    }

    pub fn set_paused(&self, id: &str, paused: bool) -> Result<Self> {
        self.update(id, |p| p.paused = paused)
    }

    fn update(&self, id: &str, change: impl Fn(&mut Property)) -> Result<Self> {
        self.find(id)?;
        let next = self
            .properties
            .iter()
            .cloned()
            .map(|mut p| {
                if p.id == id {
                    change(&mut p);
                }
                p
            })
            .collect();
        Ok(Self::new(next))
    }

    /// Featured listings for the home view, in store order
    pub fn featured(&self, limit: usize) -> Vec<&Property> {
        self.properties
            .iter()
            .filter(|p| p.featured && !p.paused)
            .take(limit)
            .collect()
    }

    pub fn owned_by<'a>(&'a self, owner_id: &'a str) -> impl Iterator<Item = &'a Property> + 'a {
        self.properties.iter().filter(move |p| p.owner_id == owner_id)
    }

    /// Check every record plus the store-wide invariants
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for property in self.properties.iter() {
            property.validate()?;
            if !seen.insert(property.id.as_str()) {
                return Err(RentifyError::validation(
                    "id",
                    format!("duplicate listing id {}", property.id),
                ));
            }
        }

        let structured = self
            .properties
            .iter()
            .filter(|p| p.location.is_structured())
            .count();
        if structured != 0 && structured != self.len() {
            return Err(RentifyError::validation(
                "location",
                "listings mix flat and structured locations",
            ));
        }
        Ok(())
    }
}

/// Static owner list
#[derive(Debug, Clone)]
pub struct OwnerDirectory {
    owners: Vec<Owner>,
}

impl OwnerDirectory {
    pub fn seeded() -> Self {
        Self {
            owners: seed::owners(),
        }
    }

    pub fn get(&self, id: &str) -> Result<&Owner> {
        self.owners
            .iter()
            .find(|o| o.id == id)
            .ok_or_else(|| RentifyError::not_found("owner", id))
    }
}
