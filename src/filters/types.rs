use super::locations::LocationSelection;
use crate::models::{Furnishing, PropertyType};
use serde::{Deserialize, Serialize};

/// Inclusive monthly price bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
    /// Slider ceiling; a `max` at or above it leaves the range open-ended
    pub ceiling: f64,
}

impl PriceRange {
    /// Full slider range, which matches every price
    pub fn unbounded(ceiling: f64) -> Self {
        Self {
            min: 0.0,
            max: ceiling,
            ceiling,
        }
    }

    pub fn between(min: f64, max: f64, ceiling: f64) -> Self {
        Self { min, max, ceiling }
    }

    pub fn is_open_ended(&self) -> bool {
        self.max >= self.ceiling
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && (self.is_open_ended() || price <= self.max)
    }

    /// Slider caption, e.g. `$500 - $10000+`
    pub fn label(&self) -> String {
        if self.is_open_ended() {
            format!("${} - ${}+", self.min, self.ceiling)
        } else {
            format!("${} - ${}", self.min, self.max)
        }
    }
}

/// Filter controls for the listings view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// `None` shows every type
    pub property_type: Option<PropertyType>,
    pub price: PriceRange,
    /// Only listings available right now
    pub available_now_only: bool,
    /// `None` accepts any furnishing
    pub furnishing: Option<Furnishing>,
    pub location: LocationSelection,
    /// Ids returned by smart search; while set, every other control is inert
    pub smart_search: Option<Vec<String>>,
}

impl FilterCriteria {
    /// Every control at its default, matching the whole store
    pub fn new(price_ceiling: f64) -> Self {
        Self {
            property_type: None,
            price: PriceRange::unbounded(price_ceiling),
            available_now_only: false,
            furnishing: None,
            location: LocationSelection::default(),
            smart_search: None,
        }
    }

    pub fn with_type(mut self, property_type: PropertyType) -> Self {
        self.property_type = Some(property_type);
        self
    }

    pub fn with_price(mut self, min: f64, max: f64) -> Self {
        self.price = PriceRange::between(min, max, self.price.ceiling);
        self
    }

    pub fn with_furnishing(mut self, furnishing: Furnishing) -> Self {
        self.furnishing = Some(furnishing);
        self
    }

    pub fn available_now(mut self) -> Self {
        self.available_now_only = true;
        self
    }

    pub fn with_location(mut self, location: LocationSelection) -> Self {
        self.location = location;
        self
    }

    pub fn with_smart_search(mut self, ids: Vec<String>) -> Self {
        self.smart_search = Some(ids);
        self
    }

    pub fn clear_smart_search(mut self) -> Self {
        self.smart_search = None;
        self
    }

    /// Whether the regular controls should be shown disabled
    pub fn controls_disabled(&self) -> bool {
        self.smart_search.is_some()
    }
}

/// Who is looking at the listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Viewer {
    Guest,
    Renter,
    Owner { owner_id: String },
    Admin,
}

/// Why a filtered view came back empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// Nothing is listed at all
    NoListings,
    /// Listings exist but the filters excluded them all
    NoMatches,
    /// The smart search ids matched nothing in the store
    NoSmartSearchMatches,
}

impl EmptyState {
    pub fn title(&self) -> &'static str {
        match self {
            EmptyState::NoListings => "No Listings Yet",
            EmptyState::NoMatches => "No Listings Found",
            EmptyState::NoSmartSearchMatches => "No Smart Search Matches",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            EmptyState::NoListings => "There are no properties listed right now. Check back later.",
            EmptyState::NoMatches => "Try adjusting your filters or check back later.",
            EmptyState::NoSmartSearchMatches => {
                "No properties matched your description. Try rephrasing your search."
            }
        }
    }
}
