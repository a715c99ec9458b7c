use crate::error::{FieldError, RentifyError, Result};
use crate::models::{Details, Furnishing, Location, Property, PropertyType};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

const MIN_TITLE: usize = 5;
const MIN_DESCRIPTION: usize = 20;
const MAX_DESCRIPTION: usize = 500;
const MIN_LOCATION: usize = 2;
const MAX_IMAGES: usize = 5;

/// Values entered in the create-listing form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingForm {
    pub title: String,
    pub property_type: PropertyType,
    pub description: String,
    pub price: f64,
    pub location: Location,
    /// Comma-separated, turned into amenity tags
    pub key_features: Option<String>,
    /// Uploaded image references, already encoded
    pub images: Vec<String>,
    pub available_from: NaiveDate,
    pub furnishing: Furnishing,
    #[serde(default)]
    pub details: Details,
}

impl ListingForm {
    /// Collect every field that fails its constraint
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if self.title.trim().chars().count() < MIN_TITLE {
            errors.push(FieldError::new(
                "title",
                format!("Title must be at least {} characters.", MIN_TITLE),
            ));
        }

        let description_len = self.description.trim().chars().count();
        if description_len < MIN_DESCRIPTION {
            errors.push(FieldError::new(
                "description",
                format!("Description must be at least {} characters.", MIN_DESCRIPTION),
            ));
        } else if description_len > MAX_DESCRIPTION {
            errors.push(FieldError::new(
                "description",
                format!("Description must not exceed {} characters.", MAX_DESCRIPTION),
            ));
        }

        if !(self.price.is_finite() && self.price > 0.0) {
            errors.push(FieldError::new("price", "Price must be a positive number."));
        }

        if self.location.display().trim().chars().count() < MIN_LOCATION {
            errors.push(FieldError::new("location", "Location is required."));
        }

        if self.images.is_empty() {
            errors.push(FieldError::new("images", "Please upload at least one image."));
        } else if self.images.len() > MAX_IMAGES {
            errors.push(FieldError::new(
                "images",
                format!("You can upload a maximum of {} images.", MAX_IMAGES),
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(RentifyError::Form(errors))
        }
    }

    /// Replace the title with a generated suggestion, verbatim
    pub fn apply_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    /// Replace the description with an enhanced one
    pub fn apply_description(&mut self, description: &str) {
        self.description = description.to_string();
    }

    pub fn amenities(&self) -> Vec<String> {
        self.key_features
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Build the new listing. `today` decides `available_now`; `now` seeds
    /// the id.
    pub fn into_property(self, owner_id: &str, today: NaiveDate, now: DateTime<Utc>) -> Result<Property> {
        self.validate()?;

        let amenities = self.amenities();
        let property = Property {
            id: format!("prop-{}", now.timestamp_millis()),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            property_type: self.property_type,
            price: self.price,
            location: self.location,
            images: self.images,
            featured: false,
            owner_id: owner_id.to_string(),
            details: self.details,
            amenities,
            available_now: today >= self.available_from,
            furnishing: self.furnishing,
            paused: false,
            analytics: None,
        };

        info!("Created listing {} ({})", property.id, property.title);
        Ok(property)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::EnhanceDescriptionOutput;

    fn form() -> ListingForm {
        ListingForm {
            title: "Sunny Loft".into(),
            property_type: PropertyType::Apartment,
            description: "Bright loft with tall windows near the train station.".into(),
            price: 1800.0,
            location: Location::Flat("Makati".into()),
            key_features: Some("Balcony, , WiFi ,Gym".into()),
            images: vec!["data:image/png;base64,AAAA".into()],
            available_from: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            furnishing: Furnishing::Partially,
            details: Details::default(),
        }
    }

    #[test]
    fn valid_form_becomes_property() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let now = today.and_hms_opt(12, 0, 0).unwrap().and_utc();
        let property = form().into_property("owner-1", today, now).unwrap();

        assert_eq!(property.id, format!("prop-{}", now.timestamp_millis()));
        assert_eq!(property.amenities, vec!["Balcony", "WiFi", "Gym"]);
        assert!(property.available_now);
        assert!(!property.featured);
        assert!(property.validate().is_ok());
    }

    #[test]
    fn future_availability_is_not_available_now() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 31).unwrap();
        let now = today.and_hms_opt(8, 0, 0).unwrap().and_utc();
        let property = form().into_property("owner-1", today, now).unwrap();
        assert!(!property.available_now);
    }

    #[test]
    fn every_bad_field_is_reported() {
        let mut bad = form();
        bad.title = "Hi".into();
        bad.description = "short".into();
        bad.price = -5.0;
        bad.images.clear();

        match bad.validate() {
            Err(RentifyError::Form(errors)) => {
                let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
                assert_eq!(fields, vec!["title", "description", "price", "images"]);
            }
            other => panic!("expected form errors, got {:?}", other),
        }
    }

    #[test]
    fn too_many_images_and_long_description() {
        let mut bad = form();
        bad.images = vec!["/a.jpg".into(); 6];
        bad.description = "x".repeat(501);
        let err = bad.validate().unwrap_err();
        assert!(matches!(err, RentifyError::Form(ref e) if e.len() == 2));
    }

    #[test]
    fn chosen_title_replaces_field_exactly() {
        let mut f = form();
        f.apply_title("  Skyline Loft Steps from the MRT ");
        assert_eq!(f.title, "  Skyline Loft Steps from the MRT ");
    }

    #[test]
    fn enhanced_description_replaces_field_and_still_validates() {
        let enhanced = EnhanceDescriptionOutput {
            enhanced_description: "Sun-filled loft with floor-to-ceiling windows, a short walk from the MRT.".into(),
            suggested_improvements: "Led with light and transit access.".into(),
        };
        let mut f = form();
        f.apply_description(&enhanced.enhanced_description);

        assert_eq!(f.description, enhanced.enhanced_description);
        assert!(f.validate().is_ok());
    }
}
