use crate::models::{Group, Item, ItemCollection};
use std::collections::BTreeMap;

/// Group name for items that lack the grouping field
pub const UNSPECIFIED_GROUP: &str = "_unspecified_";

/// Group items by one of their extra fields
/// Groups come out sorted by name and keep the items' original order
/// Each group header uses the group name as its id, value and label
pub fn group_by_field(items: &[Item], field: &str) -> ItemCollection {
    let mut groups: BTreeMap<String, Vec<Item>> = BTreeMap::new();

    for item in items {
        let name = item
            .field_as_string(field)
            .unwrap_or_else(|| UNSPECIFIED_GROUP.to_string());
        groups.entry(name).or_default().push(item.clone());
    }

    ItemCollection::Grouped(
        groups
            .into_iter()
            .map(|(name, items)| {
                let header = Item::new(name.clone(), name.clone()).with_label(name);
                Group::new(header, items)
            })
            .collect(),
    )
}

/// Flatten a collection back into its selectable items
pub fn flatten(collection: &ItemCollection) -> Vec<Item> {
    collection.items().cloned().collect()
}
