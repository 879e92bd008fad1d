use crate::models::{FilteredEntry, Group, IndexedItem, Item, ItemCollection};

/// Check if an item matches an already-lowercased query
/// Plain substring containment against the lowercased match key
pub fn matches_query(item: &Item, query_lower: &str) -> bool {
    item.match_key().to_lowercase().contains(query_lower)
}

/// Filter a list of items, returning only those that match, in their original order
pub fn filter_items<'a>(items: &'a [Item], query_lower: &str) -> Vec<&'a Item> {
    items
        .iter()
        .filter(|item| matches_query(item, query_lower))
        .collect()
}

/// Filter the children of every group and drop groups left with no children
pub fn filter_grouped_items<'a>(groups: &'a [Group], query_lower: &str) -> Vec<(&'a Group, Vec<&'a Item>)> {
    groups
        .iter()
        .map(|group| (group, filter_items(&group.items, query_lower)))
        .filter(|(_, items)| !items.is_empty())
        .collect()
}

/// Filter a collection by a case-insensitive query
///
/// Selectable entries get a zero-based `index` that runs continuously across
/// groups. Each surviving group is preceded by a label entry unless it hides
/// its label; label entries carry no index.
pub fn autocomplete_filter(items: &ItemCollection, query: &str) -> Vec<FilteredEntry> {
    let query_lower = query.to_lowercase();

    let results: Vec<FilteredEntry> = match items {
        ItemCollection::Flat(items) => filter_items(items, &query_lower)
            .into_iter()
            .enumerate()
            .map(|(index, item)| indexed(item, index))
            .collect(),
        ItemCollection::Grouped(groups) => {
            let mut item_count = 0;
            let mut results = Vec::new();

            for (group, matched) in filter_grouped_items(groups, &query_lower) {
                // A hidden label must not become a row, or fixed-height
                // virtualized lists would still reserve space for it
                if !group.hide_group_label {
                    results.push(group_label(group, &matched));
                }

                for item in matched {
                    results.push(indexed(item, item_count));
                    item_count += 1;
                }
            }

            results
        }
    };

    tracing::debug!(
        query,
        grouped = items.is_grouped(),
        input = items.len(),
        output = results.len(),
        "autocomplete filter applied"
    );

    results
}

/// Number of selectable (non-label) entries in filter output
pub fn selectable_count(entries: &[FilteredEntry]) -> usize {
    entries.iter().filter(|entry| !entry.is_group_label()).count()
}

fn indexed(item: &Item, index: usize) -> FilteredEntry {
    FilteredEntry::Item(IndexedItem {
        item: item.clone(),
        index,
    })
}

fn group_label(group: &Group, matched: &[&Item]) -> FilteredEntry {
    let mut label = Group {
        header: group.header.clone(),
        items: matched.iter().map(|item| (*item).clone()).collect(),
        hide_group_label: group.hide_group_label,
    };
    label.header.group_label = true;
    FilteredEntry::GroupLabel(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit() -> ItemCollection {
        ItemCollection::Flat(vec![Item::new("a", "Apple"), Item::new("b", "Banana")])
    }

    fn ids(entries: &[FilteredEntry]) -> Vec<&str> {
        entries.iter().map(|entry| entry.item().id.as_str()).collect()
    }

    #[test]
    fn test_flat_query_keeps_matches_and_reindexes() {
        let results = autocomplete_filter(&fruit(), "an");

        assert_eq!(results.len(), 1);
        assert_eq!(
            results[0],
            FilteredEntry::Item(IndexedItem {
                item: Item::new("b", "Banana"),
                index: 0,
            })
        );
    }

    #[test]
    fn test_flat_empty_query_matches_everything() {
        let results = autocomplete_filter(&fruit(), "");

        assert_eq!(ids(&results), vec!["a", "b"]);
        assert_eq!(results.iter().map(|e| e.index()).collect::<Vec<_>>(), vec![Some(0), Some(1)]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let results = autocomplete_filter(&fruit(), "APP");
        assert_eq!(ids(&results), vec!["a"]);
    }

    #[test]
    fn test_search_key_replaces_value_and_label() {
        let items = ItemCollection::Flat(vec![
            Item::new("a", "Apple").with_search_key("pomme"),
            Item::new("b", "Banana").with_label("yellow"),
        ]);

        assert!(autocomplete_filter(&items, "apple").is_empty());
        assert_eq!(ids(&autocomplete_filter(&items, "pomme")), vec!["a"]);
        assert_eq!(ids(&autocomplete_filter(&items, "yellow")), vec!["b"]);
    }

    #[test]
    fn test_whitespace_query_is_not_trimmed() {
        let items = ItemCollection::Flat(vec![
            Item::new("a", "Apple"),
            Item::new("b", "Big Banana").with_search_key("BigBanana"),
        ]);

        // "Apple " has a trailing separator, the search key has no space at all
        assert_eq!(ids(&autocomplete_filter(&items, " ")), vec!["a"]);
    }

    #[test]
    fn test_empty_collection() {
        assert!(autocomplete_filter(&ItemCollection::default(), "anything").is_empty());
        assert!(autocomplete_filter(&ItemCollection::Grouped(Vec::new()), "").is_empty());
    }

    #[test]
    fn test_grouped_emits_label_before_children() {
        let items = ItemCollection::Grouped(vec![Group::new(
            Item::new("animals", "Animals"),
            vec![Item::new("x", "Fox")],
        )]);

        let results = autocomplete_filter(&items, "");

        assert_eq!(results.len(), 2);
        assert!(results[0].is_group_label());
        assert!(results[0].item().group_label);
        assert_eq!(results[0].index(), None);
        assert_eq!(
            results[1],
            FilteredEntry::Item(IndexedItem {
                item: Item::new("x", "Fox"),
                index: 0,
            })
        );
    }

    #[test]
    fn test_hidden_group_label_is_not_emitted() {
        let items = ItemCollection::Grouped(vec![Group::new(
            Item::new("animals", "Animals"),
            vec![Item::new("x", "Fox")],
        )
        .hidden_label()]);

        let results = autocomplete_filter(&items, "fo");

        assert_eq!(results.len(), 1);
        assert!(!results[0].is_group_label());
        assert_eq!(results[0].index(), Some(0));
    }

    #[test]
    fn test_indices_continue_across_groups() {
        let items = ItemCollection::Grouped(vec![
            Group::new(
                Item::new("g1", "First"),
                vec![Item::new("a", "Ant"), Item::new("b", "Bee")],
            ),
            Group::new(Item::new("g2", "Second"), vec![Item::new("c", "Cat")]).hidden_label(),
            Group::new(Item::new("g3", "Third"), vec![Item::new("d", "Dog")]),
        ]);

        let results = autocomplete_filter(&items, "");

        assert_eq!(ids(&results), vec!["g1", "a", "b", "c", "g3", "d"]);
        let indices: Vec<_> = results.iter().filter_map(|e| e.index()).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_groups_without_matches_are_dropped() {
        let items = ItemCollection::Grouped(vec![
            Group::new(Item::new("g1", "Birds"), vec![Item::new("a", "Owl")]),
            Group::new(Item::new("g2", "Empty"), Vec::new()),
            Group::new(Item::new("g3", "Cats"), vec![Item::new("c", "Lion")]),
        ]);

        let results = autocomplete_filter(&items, "lion");

        assert_eq!(ids(&results), vec!["g3", "c"]);
        assert_eq!(results[1].index(), Some(0));
    }

    #[test]
    fn test_group_label_carries_filtered_children() {
        let items = ItemCollection::Grouped(vec![Group::new(
            Item::new("g", "Animals"),
            vec![Item::new("a", "Ant"), Item::new("b", "Bee")],
        )]);

        let results = autocomplete_filter(&items, "bee");

        let FilteredEntry::GroupLabel(label) = &results[0] else {
            panic!("expected a group label first");
        };
        assert_eq!(label.items, vec![Item::new("b", "Bee")]);
    }

    #[test]
    fn test_input_is_not_modified() {
        let items = fruit();
        let before = items.clone();
        let _ = autocomplete_filter(&items, "an");
        assert_eq!(items, before);
    }

    #[test]
    fn test_selectable_count_skips_labels() {
        let items = ItemCollection::Grouped(vec![Group::new(
            Item::new("g", "Animals"),
            vec![Item::new("a", "Ant"), Item::new("b", "Bee")],
        )]);

        let results = autocomplete_filter(&items, "");
        assert_eq!(results.len(), 3);
        assert_eq!(selectable_count(&results), 2);
    }
}
