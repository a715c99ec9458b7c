use super::types::{EnhanceDescriptionInput, GenerateTitleInput};

fn or_fallback<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
}

pub fn enhance_description(input: &EnhanceDescriptionInput) -> String {
    format!(
        "You are an expert property description writer. You will enhance the provided property description to make it more appealing to potential renters.

Consider the property type, target audience, and key features to tailor the description.

Original Description: {description}
Property Type: {property_type}
Target Audience: {audience}
Key Features: {features}

Enhanced Description (remember to include suggested improvements summary):
",
        description = input.description.trim(),
        property_type = input.property_type.trim(),
        audience = or_fallback(&input.target_audience, "General"),
        features = or_fallback(&input.key_features, "Not specified"),
    )
}

pub fn generate_title(input: &GenerateTitleInput) -> String {
    format!(
        "You are a real estate marketing expert who excels at writing catchy and effective property listing titles.

Generate 3-5 compelling titles for the following property. The titles should be appealing to potential renters and highlight the key aspects.

Property Type: {property_type}
Location: {location}
Key Features: {features}

Generate the titles now.
",
        property_type = input.property_type.trim(),
        location = input.location.trim(),
        features = or_fallback(&input.key_features, "Not specified"),
    )
}

/// `properties_json` is the serialized listing digest
pub fn smart_search(query: &str, properties_json: &str) -> String {
    format!(
        "You are an expert real estate agent. Your task is to find the best rental properties for a user based on their natural language query.

Analyze the user's query and compare it against the list of available properties provided below.

Return a list of property IDs that are the best fit. Also provide a brief reasoning for your selection.

User Query: {query}

Available Properties (JSON):
{properties_json}

Analyze the query and properties and return the best matches.
",
        query = query.trim(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_fall_back() {
        let prompt = enhance_description(&EnhanceDescriptionInput {
            description: "Cozy room".into(),
            property_type: "room".into(),
            target_audience: None,
            key_features: Some("  ".into()),
        });
        assert!(prompt.contains("Original Description: Cozy room"));
        assert!(prompt.contains("Target Audience: General"));
        assert!(prompt.contains("Key Features: Not specified"));
    }

    #[test]
    fn title_prompt_carries_inputs() {
        let prompt = generate_title(&GenerateTitleInput {
            property_type: "house".into(),
            location: "Cebu City".into(),
            key_features: Some("pool, garden".into()),
        });
        assert!(prompt.contains("Generate 3-5 compelling titles"));
        assert!(prompt.contains("Location: Cebu City"));
        assert!(prompt.contains("Key Features: pool, garden"));
    }

    #[test]
    fn smart_search_embeds_json() {
        let prompt = smart_search("quiet room", r#"[{"id":"prop-2"}]"#);
        assert!(prompt.contains("User Query: quiet room"));
        assert!(prompt.contains(r#"[{"id":"prop-2"}]"#));
    }
}
