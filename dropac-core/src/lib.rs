// Public modules
pub mod error;
pub mod filtering;
pub mod grouping;
pub mod io;
pub mod menu;
pub mod models;
pub mod schema_validation;
pub mod sizing;
pub mod validation;

// Re-export commonly used types for convenience
pub use error::LoadError;
pub use filtering::{autocomplete_filter, filter_grouped_items, filter_items, matches_query, selectable_count};
pub use grouping::{flatten, group_by_field, UNSPECIFIED_GROUP};
pub use io::{load_collection, load_validated_collection, parse_collection};
pub use menu::{entry_for_index, Highlight, MenuOptions, MenuState, DEFAULT_EMPTY_MESSAGE};
pub use models::{FilteredEntry, Group, IndexedItem, Item, ItemCollection};
pub use schema_validation::{collection_schema, validate_against_schema};
pub use sizing::{estimate_height, HeightConfig, DEFAULT_ITEM_HEIGHT, DEFAULT_MAX_HEIGHT};
pub use validation::{validate_collection, validate_items};
