use crate::error::LoadError;
use crate::models::ItemCollection;
use crate::schema_validation::{collection_schema, validate_against_schema};
use crate::validation::validate_collection;
use std::fs;
use std::path::Path;

/// Parse a collection document, checking it against the collection schema first
pub fn parse_collection(contents: &str) -> Result<ItemCollection, LoadError> {
    let document: serde_json::Value = serde_json::from_str(contents)?;
    validate_against_schema(&collection_schema(), &document).map_err(LoadError::Schema)?;
    Ok(serde_json::from_value(document)?)
}

/// Load a collection document from a JSON file
pub fn load_collection<P: AsRef<Path>>(path: P) -> Result<ItemCollection, LoadError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let collection = parse_collection(&contents)?;
    tracing::debug!(
        path = %path.display(),
        grouped = collection.is_grouped(),
        entries = collection.len(),
        "loaded item collection"
    );
    Ok(collection)
}

/// Load a collection and reject it if it breaks any collection invariant
pub fn load_validated_collection<P: AsRef<Path>>(path: P) -> Result<ItemCollection, LoadError> {
    let collection = load_collection(path)?;
    validate_collection(&collection).map_err(LoadError::Validation)?;
    Ok(collection)
}
