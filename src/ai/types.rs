use crate::models::{Details, Furnishing, Property, PropertyType};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceDescriptionInput {
    pub description: String,
    /// e.g. apartment, house, room, car, commercial space
    pub property_type: String,
    /// e.g. students, families, business travelers
    pub target_audience: Option<String>,
    /// Comma-separated
    pub key_features: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceDescriptionOutput {
    pub enhanced_description: String,
    /// What was changed, in prose
    pub suggested_improvements: String,
}

impl EnhanceDescriptionOutput {
    pub fn schema() -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "enhancedDescription": {
                    "type": "STRING",
                    "description": "The enhanced description of the property."
                },
                "suggestedImprovements": {
                    "type": "STRING",
                    "description": "A summary of the suggested improvements made to the description."
                }
            },
            "required": ["enhancedDescription", "suggestedImprovements"]
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateTitleInput {
    pub property_type: String,
    pub location: String,
    pub key_features: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateTitleOutput {
    /// Asked for 3-5, not guaranteed
    pub titles: Vec<String>,
}

impl GenerateTitleOutput {
    pub fn schema() -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "titles": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "A list of 3-5 catchy and descriptive titles for the property listing."
                }
            },
            "required": ["titles"]
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartSearchOutput {
    pub matched_property_ids: Vec<String>,
    pub reasoning: String,
}

impl SmartSearchOutput {
    pub fn schema() -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "matchedPropertyIds": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "A list of property IDs that best match the user's query."
                },
                "reasoning": {
                    "type": "STRING",
                    "description": "A brief explanation of why these properties were chosen."
                }
            },
            "required": ["matchedPropertyIds", "reasoning"]
        })
    }
}

/// Fields of a listing the smart search prompt gets to see
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDigest<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub price: f64,
    pub location: String,
    pub amenities: &'a [String],
    pub available_now: bool,
    pub furnishing: Furnishing,
    pub details: &'a Details,
}

impl<'a> From<&'a Property> for PropertyDigest<'a> {
    fn from(p: &'a Property) -> Self {
        Self {
            id: &p.id,
            title: &p.title,
            description: &p.description,
            property_type: p.property_type,
            price: p.price,
            location: p.location.display(),
            amenities: &p.amenities,
            available_now: p.available_now,
            furnishing: p.furnishing,
            details: &p.details,
        }
    }
}
