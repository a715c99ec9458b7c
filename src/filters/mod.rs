pub mod composer;
pub mod locations;
pub mod types;

pub use composer::{apply, FilteredView};
pub use locations::{Level, LocationSelection, LocationTree};
pub use types::{EmptyState, FilterCriteria, PriceRange, Viewer};
