pub mod seed;

use crate::error::{RentifyError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of rentable item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    Room,
    Bedspace,
    Commercial,
    House,
    Car,
}

impl PropertyType {
    pub const ALL: [PropertyType; 6] = [
        PropertyType::Apartment,
        PropertyType::Room,
        PropertyType::Bedspace,
        PropertyType::Commercial,
        PropertyType::House,
        PropertyType::Car,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::Room => "room",
            PropertyType::Bedspace => "bedspace",
            PropertyType::Commercial => "commercial",
            PropertyType::House => "house",
            PropertyType::Car => "car",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = RentifyError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        PropertyType::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| RentifyError::validation("type", format!("unknown property type '{}'", s)))
    }
}

/// Furnishing status of a listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Furnishing {
    Furnished,
    Unfurnished,
    Partially,
}

impl Furnishing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Furnishing::Furnished => "furnished",
            Furnishing::Unfurnished => "unfurnished",
            Furnishing::Partially => "partially",
        }
    }
}

impl fmt::Display for Furnishing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured address down to barangay level
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subdivision {
    pub region: String,
    pub province: String,
    pub city: String,
    pub barangay: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
}

/// Location of a listing, either a display string or a structured subdivision
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Location {
    Flat(String),
    Structured(Subdivision),
}

impl Location {
    pub fn subdivision(&self) -> Option<&Subdivision> {
        match self {
            Location::Structured(sub) => Some(sub),
            Location::Flat(_) => None,
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, Location::Structured(_))
    }

    /// Human readable form, street first
    pub fn display(&self) -> String {
        match self {
            Location::Flat(text) => text.clone(),
            Location::Structured(sub) => {
                let mut parts: Vec<&str> = Vec::with_capacity(5);
                if let Some(street) = &sub.street {
                    parts.push(street);
                }
                parts.push(&sub.barangay);
                parts.push(&sub.city);
                parts.push(&sub.province);
                parts.join(", ")
            }
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Details {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baths: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sqft: Option<u32>,
}

/// Display-only counters
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Analytics {
    pub views: u32,
    pub inquiries: u32,
}

/// Core listing data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub price: f64,
    pub location: Location,
    pub images: Vec<String>,
    pub featured: bool,
    pub owner_id: String,
    #[serde(default)]
    pub details: Details,
    pub amenities: Vec<String>,
    pub available_now: bool,
    pub furnishing: Furnishing,
    #[serde(default)]
    pub paused: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics: Option<Analytics>,
}

impl Property {
    pub const MIN_TITLE_LEN: usize = 5;

    /// Check the record-level invariants
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(RentifyError::validation("id", "id must not be empty"));
        }
        if self.title.trim().chars().count() < Self::MIN_TITLE_LEN {
            return Err(RentifyError::validation(
                "title",
                format!("title must be at least {} characters", Self::MIN_TITLE_LEN),
            ));
        }
        if !(self.price.is_finite() && self.price > 0.0) {
            return Err(RentifyError::validation("price", "price must be a positive number"));
        }
        if self.images.is_empty() {
            return Err(RentifyError::validation("images", "at least one image is required"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Owner {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Renter {
    pub id: String,
    pub name: String,
    pub avatar: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    /// Either an owner id or a renter id
    pub sender_id: String,
    pub text: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// The slice of a listing a conversation header shows
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PropertyRef {
    pub id: String,
    pub title: String,
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Conversation {
    pub id: String,
    pub property: PropertyRef,
    pub owner: Owner,
    pub renter: Renter,
    pub messages: Vec<Message>,
}
