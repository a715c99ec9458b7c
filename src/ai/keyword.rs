use super::traits::SmartMatcher;
use super::types::SmartSearchOutput;
use crate::error::Result;
use crate::models::{Furnishing, Property, PropertyType};
use async_trait::async_trait;
use std::collections::HashSet;
use tracing::debug;

const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "the", "for", "with", "in", "near", "to", "of", "on", "me", "my", "i",
    "im", "looking", "want", "need", "find", "place", "something", "that", "is", "has", "have",
    "some", "or", "at", "by", "rent", "rental",
];

const PRICE_CAP_WORDS: &[&str] = &["under", "below", "max", "maximum", "within", "budget"];

/// Deterministic local stand-in for the model matcher.
///
/// Scores each listing by how many query words it mentions, with extra
/// weight for type and furnishing hits. A price cap ("under 1000") and the
/// word "available" act as hard constraints.
#[derive(Debug, Clone, Default)]
pub struct KeywordMatcher;

#[derive(Debug, Default)]
struct Query {
    words: Vec<String>,
    types: HashSet<PropertyType>,
    furnishing: Option<Furnishing>,
    price_cap: Option<f64>,
    needs_available: bool,
}

fn is_one_of(word: &str, list: &[&str]) -> bool {
    list.iter().any(|w| *w == word)
}

/// Drop one plural 's', keeping words like "less" and "bus" whole
fn stem(word: &str) -> &str {
    match word.strip_suffix('s') {
        Some(stem) if stem.len() >= 3 && !stem.ends_with('s') => stem,
        _ => word,
    }
}

fn parse_query(raw: &str) -> Query {
    let tokens: Vec<String> = raw
        .to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '.' || c == ','))
        .map(|t| t.trim_matches(|c| c == '.' || c == ',').to_string())
        .filter(|t| !t.is_empty())
        .collect();

    let mut query = Query::default();
    for (i, token) in tokens.iter().enumerate() {
        if is_one_of(token, PRICE_CAP_WORDS) {
            if let Some(cap) = tokens.get(i + 1).and_then(|n| n.replace(',', "").parse::<f64>().ok()) {
                query.price_cap = Some(cap);
            }
            continue;
        }

        let singular = stem(token);
        if let Ok(t) = singular.parse::<PropertyType>() {
            query.types.insert(t);
            continue;
        }

        match token.as_str() {
            "furnished" => query.furnishing = Some(Furnishing::Furnished),
            "unfurnished" => query.furnishing = Some(Furnishing::Unfurnished),
            "available" | "now" | "immediately" => query.needs_available = true,
            t if t.replace(',', "").parse::<f64>().is_ok() => {}
            t if t.len() > 2 && !is_one_of(t, STOP_WORDS) => query.words.push(singular.to_string()),
            _ => {}
        }
    }
    query
}

fn score(property: &Property, query: &Query) -> Option<usize> {
    if query.price_cap.is_some_and(|cap| property.price > cap) {
        return None;
    }
    if query.needs_available && !property.available_now {
        return None;
    }

    let text = format!(
        "{} {} {} {}",
        property.title,
        property.description,
        property.location.display(),
        property.amenities.join(" ")
    )
    .to_lowercase();
    let haystack: HashSet<&str> = text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(stem)
        .collect();

    let mut total = query
        .words
        .iter()
        .filter(|w| haystack.contains(w.as_str()))
        .count();
    if query.types.contains(&property.property_type) {
        total += 3;
    }
    if query.furnishing == Some(property.furnishing) {
        total += 2;
    }

    let constrained = query.price_cap.is_some() || query.needs_available;
    (total > 0 || (constrained && query.words.is_empty() && query.types.is_empty()))
        .then_some(total)
}

#[async_trait]
impl SmartMatcher for KeywordMatcher {
    async fn find_matches(&self, query: &str, properties: &[Property]) -> Result<SmartSearchOutput> {
        let parsed = parse_query(query);
        debug!("Keyword query: {:?}", parsed);

        let mut scored: Vec<(usize, &Property)> = properties
            .iter()
            .filter_map(|p| score(p, &parsed).map(|s| (s, p)))
            .collect();
        // stable, so ties keep store order
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        let matched_property_ids: Vec<String> = scored.iter().map(|(_, p)| p.id.clone()).collect();
        let reasoning = if matched_property_ids.is_empty() {
            "No listing mentions what you asked for.".to_string()
        } else {
            let mut terms: Vec<String> = parsed.types.iter().map(|t| t.to_string()).collect();
            terms.extend(parsed.words.iter().cloned());
            if let Some(cap) = parsed.price_cap {
                terms.push(format!("price up to {}", cap));
            }
            format!(
                "Matched {} of {} listings on: {}.",
                matched_property_ids.len(),
                properties.len(),
                terms.join(", ")
            )
        };

        Ok(SmartSearchOutput {
            matched_property_ids,
            reasoning,
        })
    }

    fn matcher_name(&self) -> &'static str {
        "keyword"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::PropertyStore;

    async fn ids(query: &str) -> Vec<String> {
        let store = PropertyStore::seeded();
        KeywordMatcher
            .find_matches(query, store.as_slice())
            .await
            .unwrap()
            .matched_property_ids
    }

    #[tokio::test]
    async fn type_words_rank_first() {
        assert_eq!(ids("apartment with a gym").await, vec!["prop-1", "prop-5"]);
    }

    #[tokio::test]
    async fn price_cap_is_a_hard_limit() {
        assert_eq!(ids("furnished room under 1000").await, vec!["prop-2", "prop-3"]);
    }

    #[tokio::test]
    async fn available_filters_out_later_listings() {
        assert_eq!(ids("available apartments").await, vec!["prop-1"]);
    }

    #[tokio::test]
    async fn unrelated_query_matches_nothing() {
        let store = PropertyStore::seeded();
        let out = KeywordMatcher
            .find_matches("yacht marina", store.as_slice())
            .await
            .unwrap();
        assert!(out.matched_property_ids.is_empty());
        assert_eq!(out.reasoning, "No listing mentions what you asked for.");
    }

    #[tokio::test]
    async fn words_match_whole_words_only() {
        let q = parse_query("less noise near the bus");
        assert_eq!(q.words, vec!["less", "noise", "bus"]);
        assert!(ids("less noise near the bus").await.is_empty());

        // "spaces" in prop-2 still counts for "space"
        assert_eq!(ids("living space").await, vec!["prop-2", "prop-4"]);
    }

    #[test]
    fn query_parsing_extracts_constraints() {
        let q = parse_query("Unfurnished houses below 2,500 available now in Cebu");
        assert!(q.types.contains(&PropertyType::House));
        assert_eq!(q.furnishing, Some(Furnishing::Unfurnished));
        assert_eq!(q.price_cap, Some(2500.0));
        assert!(q.needs_available);
        assert_eq!(q.words, vec!["cebu"]);
    }
}
