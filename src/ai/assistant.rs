use super::prompts;
use super::traits::{ModelClient, ModelRequest, SmartMatcher};
use super::types::{
    EnhanceDescriptionInput, EnhanceDescriptionOutput, GenerateTitleInput, GenerateTitleOutput,
    PropertyDigest, SmartSearchOutput,
};
use crate::error::{RentifyError, Result};
use crate::models::Property;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};

const EXPECTED_TITLES: std::ops::RangeInclusive<usize> = 3..=5;

/// The listing-form AI helpers and the model-backed smart search.
///
/// Each call is a single stateless round-trip: no caching, no retry.
pub struct PropertyAssistant<C: ModelClient> {
    client: C,
}

impl<C: ModelClient> PropertyAssistant<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Send one prompt and parse the answer against `T`'s shape
    async fn call<T: DeserializeOwned>(&self, prompt: String, schema: Value) -> Result<T> {
        debug!("Calling {} ({} prompt chars)", self.client.model_name(), prompt.len());
        let value = self
            .client
            .generate(ModelRequest {
                prompt,
                response_schema: schema,
            })
            .await
            .map_err(|e| RentifyError::External(format!("{:#}", e)))?;

        serde_json::from_value(value)
            .map_err(|e| RentifyError::External(format!("response did not match schema: {}", e)))
    }

    pub async fn enhance_description(
        &self,
        input: &EnhanceDescriptionInput,
    ) -> Result<EnhanceDescriptionOutput> {
        if input.description.trim().is_empty() || input.property_type.trim().is_empty() {
            return Err(RentifyError::MissingPrecondition(
                "Please provide a description and select a property type before using AI enhancement."
                    .to_string(),
            ));
        }

        let output: EnhanceDescriptionOutput = self
            .call(prompts::enhance_description(input), EnhanceDescriptionOutput::schema())
            .await
            .map_err(|e| {
                warn!("Error enhancing description: {}", e);
                RentifyError::EnhancementFailed
            })?;

        info!("✨ Description enhanced");
        Ok(output)
    }

    pub async fn generate_titles(&self, input: &GenerateTitleInput) -> Result<GenerateTitleOutput> {
        if input.property_type.trim().is_empty() || input.location.trim().is_empty() {
            return Err(RentifyError::MissingPrecondition(
                "Please provide a property type and location to generate titles.".to_string(),
            ));
        }

        let output: GenerateTitleOutput = self
            .call(prompts::generate_title(input), GenerateTitleOutput::schema())
            .await
            .map_err(|e| {
                warn!("Error generating titles: {}", e);
                RentifyError::TitleGenerationFailed
            })?;

        let titles: Vec<String> = output
            .titles
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        if titles.is_empty() {
            warn!("Model returned no usable titles");
            return Err(RentifyError::TitleGenerationFailed);
        }
        if !EXPECTED_TITLES.contains(&titles.len()) {
            warn!("Model returned {} titles, expected 3-5; keeping them", titles.len());
        }

        info!("Generated {} title suggestion(s)", titles.len());
        Ok(GenerateTitleOutput { titles })
    }
}

#[async_trait]
impl<C: ModelClient> SmartMatcher for PropertyAssistant<C> {
    async fn find_matches(&self, query: &str, properties: &[Property]) -> Result<SmartSearchOutput> {
        let digest: Vec<PropertyDigest> = properties.iter().map(PropertyDigest::from).collect();
        let json = serde_json::to_string(&digest)
            .map_err(|e| RentifyError::External(format!("failed to serialize listings: {}", e)))?;

        self.call(prompts::smart_search(query, &json), SmartSearchOutput::schema())
            .await
    }

    fn matcher_name(&self) -> &'static str {
        "model"
    }
}

/// Run a natural-language search over `properties`.
///
/// Ids come back exactly as the matcher produced them; ids no longer in the
/// store simply match nothing when applied as a filter.
pub async fn smart_search(
    matcher: &dyn SmartMatcher,
    query: &str,
    properties: &[Property],
) -> Result<SmartSearchOutput> {
    if query.trim().is_empty() {
        return Err(RentifyError::MissingPrecondition(
            "Please describe what you are looking for.".to_string(),
        ));
    }

    info!("🔎 Smart search via {} over {} listing(s)", matcher.matcher_name(), properties.len());
    let output = matcher.find_matches(query, properties).await.map_err(|e| {
        warn!("Smart search failed: {}", e);
        RentifyError::SmartSearchFailed
    })?;

    info!("Smart search matched {} id(s)", output.matched_property_ids.len());
    Ok(output)
}
