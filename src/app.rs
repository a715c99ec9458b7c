use crate::ai::{smart_search, SmartMatcher, SmartSearchOutput};
use crate::config::Config;
use crate::error::{RentifyError, Result};
use crate::filters::{self, FilterCriteria, FilteredView, LocationTree, Viewer};
use crate::inbox::Inbox;
use crate::listing::ListingForm;
use crate::models::{Owner, Property};
use crate::session::Role;
use crate::store::{OwnerDirectory, PropertyStore};
use chrono::{DateTime, Utc};
use tracing::info;

/// Everything the application reads and mutates, passed around explicitly.
///
/// Mutations swap in a new store or inbox snapshot; borrowed views of an
/// older snapshot are never changed underneath the caller.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: PropertyStore,
    pub owners: OwnerDirectory,
    pub inbox: Inbox,
    pub locations: LocationTree,
    pub price_ceiling: f64,
}

impl AppState {
    pub fn seeded(config: &Config) -> Self {
        Self {
            store: PropertyStore::seeded(),
            owners: OwnerDirectory::seeded(),
            inbox: Inbox::seeded(),
            locations: LocationTree::reference(),
            price_ceiling: config.price_ceiling,
        }
    }

    /// Criteria with every control at its default
    pub fn default_criteria(&self) -> FilterCriteria {
        FilterCriteria::new(self.price_ceiling)
    }

    pub fn listings(&self, criteria: &FilterCriteria, viewer: &Viewer) -> FilteredView<'_> {
        filters::apply(&self.store, criteria, viewer)
    }

    /// A listing with its owner, for the detail view
    pub fn property_detail(&self, id: &str) -> Result<(&Property, &Owner)> {
        let property = self.store.find(id)?;
        let owner = self.owners.get(&property.owner_id)?;
        Ok((property, owner))
    }

    pub fn add_listing(
        &mut self,
        form: ListingForm,
        owner_id: &str,
        now: DateTime<Utc>,
    ) -> Result<&Property> {
        self.owners.get(owner_id)?;
        let property = form.into_property(owner_id, now.date_naive(), now)?;
        let id = property.id.clone();
        self.store = self.store.append(property);
        self.store.find(&id)
    }

    /// Delete on behalf of `owner_id`; only the listing's owner may do so
    pub fn delete_listing(&mut self, id: &str, owner_id: &str) -> Result<()> {
        let property = self.store.find(id)?;
        if property.owner_id != owner_id {
            return Err(RentifyError::validation(
                "owner",
                format!("listing {} belongs to another owner", id),
            ));
        }
        self.store = self.store.remove(id);
        info!("🗑️ Deleted listing {}", id);
        Ok(())
    }

    pub fn set_featured(&mut self, id: &str, featured: bool) -> Result<()> {
        self.store = self.store.set_featured(id, featured)?;
        Ok(())
    }

    pub fn set_paused(&mut self, id: &str, paused: bool) -> Result<()> {
        self.store = self.store.set_paused(id, paused)?;
        Ok(())
    }

    /// Run a smart search and switch `criteria` into allowlist mode
    pub async fn smart_search(
        &self,
        matcher: &dyn SmartMatcher,
        query: &str,
        criteria: FilterCriteria,
    ) -> Result<(FilterCriteria, SmartSearchOutput)> {
        let output = smart_search(matcher, query, self.store.as_slice()).await?;
        let criteria = criteria.with_smart_search(output.matched_property_ids.clone());
        Ok((criteria, output))
    }

    pub fn send_message(&mut self, conversation_id: &str, role: Role, text: &str) -> Result<()> {
        self.inbox = self.inbox.send(conversation_id, role, text, Utc::now())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::KeywordMatcher;
    use crate::filters::EmptyState;
    use crate::models::{Details, Furnishing, Location, PropertyType};
    use chrono::NaiveDate;

    fn state() -> AppState {
        AppState::seeded(&Config::default())
    }

    fn form() -> ListingForm {
        ListingForm {
            title: "Garden Townhouse".into(),
            property_type: PropertyType::House,
            description: "Two-storey townhouse with a private garden and carport.".into(),
            price: 3200.0,
            location: Location::Flat("Mandaue".into()),
            key_features: Some("Garden, Carport".into()),
            images: vec!["/upload-1.jpg".into()],
            available_from: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            furnishing: Furnishing::Unfurnished,
            details: Details::default(),
        }
    }

    #[test]
    fn new_listing_shows_up_first() {
        let mut app = state();
        let id = app.add_listing(form(), "owner-2", Utc::now()).unwrap().id.clone();

        let view = app.listings(&app.default_criteria(), &Viewer::Guest);
        assert_eq!(view.ids()[0], id);
        assert_eq!(view.len(), 6);
    }

    #[test]
    fn unknown_owner_cannot_list() {
        let mut app = state();
        assert!(app.add_listing(form(), "owner-9", Utc::now()).is_err());
        assert_eq!(app.store.len(), 5);
    }

    #[test]
    fn delete_requires_ownership() {
        let mut app = state();
        assert!(app.delete_listing("prop-2", "owner-1").is_err());
        app.delete_listing("prop-3", "owner-1").unwrap();
        let ids: Vec<_> = app.store.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["prop-1", "prop-2", "prop-4", "prop-5"]);
        assert!(matches!(
            app.property_detail("prop-3"),
            Err(RentifyError::NotFound { .. })
        ));
    }

    #[test]
    fn detail_includes_owner() {
        let app = state();
        let (property, owner) = app.property_detail("prop-4").unwrap();
        assert_eq!(property.title, "Spacious Commercial Space");
        assert_eq!(owner.name, "Bob Williams");
    }

    #[tokio::test]
    async fn smart_search_switches_criteria_to_allowlist() {
        let app = state();
        let criteria = app.default_criteria().with_type(PropertyType::Car);
        let (criteria, output) = app
            .smart_search(&KeywordMatcher, "commercial space with parking", criteria)
            .await
            .unwrap();

        assert!(criteria.controls_disabled());
        let view = app.listings(&criteria, &Viewer::Renter);
        assert_eq!(output.matched_property_ids[0], "prop-4");
        assert!(view.ids().contains(&"prop-4"));
        assert_eq!(view.len(), output.matched_property_ids.len());
        assert!(view.empty_state.is_none());
    }

    #[tokio::test]
    async fn smart_search_with_no_hits_reports_its_own_empty_state() {
        let app = state();
        let (criteria, _) = app
            .smart_search(&KeywordMatcher, "yacht", app.default_criteria())
            .await
            .unwrap();
        let view = app.listings(&criteria, &Viewer::Guest);
        assert_eq!(view.empty_state, Some(EmptyState::NoSmartSearchMatches));
    }

    #[test]
    fn messages_and_toggles_update_state() {
        let mut app = state();
        app.send_message("convo-1", Role::Owner, "See you at 3pm.").unwrap();
        assert_eq!(app.inbox.get("convo-1").unwrap().messages.len(), 4);

        app.set_featured("prop-5", true).unwrap();
        assert_eq!(app.store.featured(4).len(), 3);
        app.set_paused("prop-5", true).unwrap();
        assert_eq!(app.store.featured(4).len(), 2);
    }
}
