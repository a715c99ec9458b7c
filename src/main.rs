use rentify::ai::{GeminiClient, KeywordMatcher, PropertyAssistant, SmartMatcher};
use rentify::filters::{Level, Viewer};
use rentify::models::PropertyType;
use rentify::session::{FileStorage, SessionManager};
use rentify::{AppState, Config};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "rentify=info".into()),
        )
        .init();

    info!("🏠 Rentify - listings demo");
    info!("==========================");

    let config = Config::from_env()?;
    let state = AppState::seeded(&config);

    let session = SessionManager::restore(FileStorage::new(&config.session_path));
    let viewer = session.session().viewer();
    info!("Viewing as {:?}", viewer);

    // Default view
    let criteria = state.default_criteria();
    let view = state.listings(&criteria, &viewer);
    info!("\n✅ {} listing(s) visible\n", view.len());

    for (i, property) in view.properties.iter().enumerate() {
        println!("{}. {} ({} / month)", i + 1, property.title, property.price);
        println!("   {} · {}", property.property_type, property.furnishing);
        println!("   {}", property.location.display());
        println!("   ID: {}", property.id);
        println!("   Amenities: {}", property.amenities.join(", "));
        println!();
    }

    // A narrowed view: apartments in NCR
    let ncr = state
        .locations
        .select(&Default::default(), Level::Region, "NCR")?;
    let narrowed = criteria
        .clone()
        .with_type(PropertyType::Apartment)
        .with_location(ncr);
    let apartments = state.listings(&narrowed, &Viewer::Guest);
    match apartments.empty_state {
        Some(empty) => info!("{}: {}", empty.title(), empty.message()),
        None => info!("Apartments in NCR: {}", apartments.ids().join(", ")),
    }

    // Smart search from the command line, model-backed when a key is set
    let query = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if query.trim().is_empty() {
        info!("Pass a query to try smart search, e.g. `rentify furnished room under 1000`");
        return Ok(());
    }

    let matcher: Box<dyn SmartMatcher> = if config.ai_enabled() {
        Box::new(PropertyAssistant::new(GeminiClient::from_config(&config)?))
    } else {
        warn!("GEMINI_API_KEY not set, falling back to keyword matching");
        Box::new(KeywordMatcher)
    };

    match state.smart_search(matcher.as_ref(), &query, criteria).await {
        Ok((searched, output)) => {
            info!("Smart Search Complete! {}", output.reasoning);
            let hits = state.listings(&searched, &viewer);
            match hits.empty_state {
                Some(empty) => println!("{}: {}", empty.title(), empty.message()),
                None => {
                    for property in &hits.properties {
                        println!("- {} [{}]", property.title, property.id);
                    }
                }
            }
        }
        Err(e) => {
            let note = e.notification();
            warn!("{}: {}", note.title, note.description);
        }
    }

    Ok(())
}
