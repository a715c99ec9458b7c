use super::types::{EmptyState, FilterCriteria, Viewer};
use crate::models::Property;
use crate::store::PropertyStore;
use std::collections::HashSet;
use tracing::debug;

/// Result of filtering the store for one viewer
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    /// Matches in store order
    pub properties: Vec<&'a Property>,
    /// Set when `properties` is empty
    pub empty_state: Option<EmptyState>,
    /// Regular filter controls are inert (smart search mode)
    pub controls_disabled: bool,
}

impl FilteredView<'_> {
    pub fn ids(&self) -> Vec<&str> {
        self.properties.iter().map(|p| p.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// Apply `criteria` to `store` as seen by `viewer`.
///
/// Owners see every listing they own, paused or not, with no other predicate
/// applied. Everyone else sees unpaused listings; an active smart search
/// allowlist replaces the regular predicates entirely.
pub fn apply<'a>(
    store: &'a PropertyStore,
    criteria: &FilterCriteria,
    viewer: &Viewer,
) -> FilteredView<'a> {
    if let Viewer::Owner { owner_id } = viewer {
        let properties: Vec<&Property> = store
            .iter()
            .filter(|p| &p.owner_id == owner_id)
            .collect();
        let empty_state = properties.is_empty().then_some(EmptyState::NoListings);
        debug!("Owner {} sees {} own listing(s)", owner_id, properties.len());
        return FilteredView {
            properties,
            empty_state,
            controls_disabled: false,
        };
    }

    let candidates: Vec<&Property> = store.iter().filter(|p| !p.paused).collect();
    let candidate_count = candidates.len();

    let (properties, miss): (Vec<&Property>, EmptyState) = match &criteria.smart_search {
        Some(ids) => {
            let allow: HashSet<&str> = ids.iter().map(String::as_str).collect();
            let hits = candidates
                .into_iter()
                .filter(|p| allow.contains(p.id.as_str()))
                .collect();
            (hits, EmptyState::NoSmartSearchMatches)
        }
        None => {
            let hits = candidates
                .into_iter()
                .filter(|p| matches(p, criteria))
                .collect();
            (hits, EmptyState::NoMatches)
        }
    };

    let empty_state = match (candidate_count, properties.is_empty()) {
        (0, _) => Some(EmptyState::NoListings),
        (_, true) => Some(miss),
        _ => None,
    };

    debug!(
        "Filtered {} candidate(s) down to {}",
        candidate_count,
        properties.len()
    );

    FilteredView {
        properties,
        empty_state,
        controls_disabled: criteria.controls_disabled(),
    }
}

/// Every regular predicate, ANDed
pub fn matches(property: &Property, criteria: &FilterCriteria) -> bool {
    let type_ok = criteria
        .property_type
        .map_or(true, |t| property.property_type == t);
    let furnishing_ok = criteria
        .furnishing
        .map_or(true, |f| property.furnishing == f);
    let availability_ok = !criteria.available_now_only || property.available_now;

    type_ok
        && furnishing_ok
        && availability_ok
        && criteria.price.contains(property.price)
        && criteria.location.matches(&property.location)
}
