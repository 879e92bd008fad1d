use crate::models::{Item, ItemCollection};
use std::collections::HashSet;

/// Validate a collection's invariants
/// Returns Ok(()) if valid, or Err(Vec<String>) with validation errors
pub fn validate_collection(collection: &ItemCollection) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let mut seen_ids = HashSet::new();

    match collection {
        ItemCollection::Flat(items) => {
            validate_items(items, "Item", &mut seen_ids, &mut errors);

            for (idx, item) in items.iter().enumerate() {
                if item.group_label {
                    errors.push(format!(
                        "Item #{} ('{}'): group labels only belong in grouped collections",
                        idx + 1,
                        item.id
                    ));
                }
            }
        }
        ItemCollection::Grouped(groups) => {
            for (group_idx, group) in groups.iter().enumerate() {
                let group_ref = format!("Group #{} ('{}')", group_idx + 1, group.header.id);

                if group.items.is_empty() {
                    tracing::debug!(group = %group_ref, "group has no items and will never render");
                }

                validate_items(&group.items, &format!("{} item", group_ref), &mut seen_ids, &mut errors);
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Check ids are present and unique; `seen_ids` spans the whole collection
pub fn validate_items<'a>(
    items: &'a [Item],
    context: &str,
    seen_ids: &mut HashSet<&'a str>,
    errors: &mut Vec<String>,
) {
    for (idx, item) in items.iter().enumerate() {
        let item_ref = format!("{} #{} ('{}')", context, idx + 1, item.id);

        if item.id.trim().is_empty() {
            errors.push(format!("{}: id cannot be empty", item_ref));
            continue;
        }

        if !seen_ids.insert(item.id.as_str()) {
            errors.push(format!("{}: duplicate id", item_ref));
        }
    }
}
