use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;

/// A single selectable entry in an autocomplete list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default)]
    pub id: String,
    /// Display value, either plain text or an arbitrary record
    #[serde(default)]
    pub value: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Explicit text to match against instead of `value` and `label`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_key: Option<String>,
    /// Marks a non-selectable group header row
    #[serde(default, skip_serializing_if = "is_false")]
    pub group_label: bool,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

impl Item {
    pub fn new(id: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_search_key(mut self, search_key: impl Into<String>) -> Self {
        self.search_key = Some(search_key.into());
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    /// Text form of `value`: strings as-is, null as empty, anything else as compact JSON
    pub fn value_text(&self) -> Cow<'_, str> {
        json_text(&self.value)
    }

    /// Text form of `label`, empty when there is none
    pub fn label_text(&self) -> &str {
        self.label.as_deref().unwrap_or_default()
    }

    /// The string a query is matched against
    ///
    /// A non-empty `search_key` wins. Otherwise value and label text are joined
    /// with a single space, even when either side is empty.
    pub fn match_key(&self) -> Cow<'_, str> {
        match self.search_key.as_deref() {
            Some(key) if !key.is_empty() => Cow::Borrowed(key),
            _ => Cow::Owned(format!("{} {}", self.value_text(), self.label_text())),
        }
    }

    /// Get an extra field as a string, if it is one
    pub fn field_as_string(&self, name: &str) -> Option<String> {
        match self.extra.get(name)? {
            serde_json::Value::Null => None,
            other => Some(json_text(other).into_owned()),
        }
    }
}

fn json_text(value: &serde_json::Value) -> Cow<'_, str> {
    match value {
        serde_json::Value::String(s) => Cow::Borrowed(s),
        serde_json::Value::Null => Cow::Borrowed(""),
        other => Cow::Owned(other.to_string()),
    }
}

/// A named collection of items rendered together under an optional label row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[serde(flatten)]
    pub header: Item,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub hide_group_label: bool,
}

impl Group {
    pub fn new(header: Item, items: Vec<Item>) -> Self {
        Self {
            header,
            items,
            hide_group_label: false,
        }
    }

    pub fn hidden_label(mut self) -> Self {
        self.hide_group_label = true;
        self
    }
}

/// Items handed to the filter, either flat or grouped (never mixed)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemCollection {
    Flat(Vec<Item>),
    Grouped(Vec<Group>),
}

impl Default for ItemCollection {
    fn default() -> Self {
        ItemCollection::Flat(Vec::new())
    }
}

impl From<Vec<Item>> for ItemCollection {
    fn from(items: Vec<Item>) -> Self {
        ItemCollection::Flat(items)
    }
}

impl From<Vec<Group>> for ItemCollection {
    fn from(groups: Vec<Group>) -> Self {
        ItemCollection::Grouped(groups)
    }
}

impl ItemCollection {
    /// Number of top-level entries (items or groups)
    pub fn len(&self) -> usize {
        match self {
            ItemCollection::Flat(items) => items.len(),
            ItemCollection::Grouped(groups) => groups.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_grouped(&self) -> bool {
        matches!(self, ItemCollection::Grouped(_))
    }

    /// Iterate over every selectable item, descending into groups
    pub fn items(&self) -> Box<dyn Iterator<Item = &Item> + '_> {
        match self {
            ItemCollection::Flat(items) => Box::new(items.iter()),
            ItemCollection::Grouped(groups) => Box::new(groups.iter().flat_map(|g| g.items.iter())),
        }
    }
}

/// An item annotated with its position among selectable results
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexedItem {
    #[serde(flatten)]
    pub item: Item,
    pub index: usize,
}

/// One row of filter output
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FilteredEntry {
    /// Copy of a group with `group_label` set on its header
    GroupLabel(Group),
    Item(IndexedItem),
}

impl FilteredEntry {
    pub fn is_group_label(&self) -> bool {
        matches!(self, FilteredEntry::GroupLabel(_))
    }

    /// Selectable index, `None` for label rows
    pub fn index(&self) -> Option<usize> {
        match self {
            FilteredEntry::GroupLabel(_) => None,
            FilteredEntry::Item(indexed) => Some(indexed.index),
        }
    }

    /// The underlying item, or the group header for label rows
    pub fn item(&self) -> &Item {
        match self {
            FilteredEntry::GroupLabel(group) => &group.header,
            FilteredEntry::Item(indexed) => &indexed.item,
        }
    }

    pub fn into_item(self) -> Item {
        match self {
            FilteredEntry::GroupLabel(group) => group.header,
            FilteredEntry::Item(indexed) => indexed.item,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_match_key_prefers_search_key() {
        let item = Item::new("a", "Apple").with_label("Fruit").with_search_key("granny smith");
        assert_eq!(item.match_key(), "granny smith");
    }

    #[test]
    fn test_match_key_ignores_empty_search_key() {
        let item = Item::new("a", "Apple").with_label("Fruit").with_search_key("");
        assert_eq!(item.match_key(), "Apple Fruit");
    }

    #[test]
    fn test_match_key_with_missing_label_keeps_separator() {
        let item = Item::new("a", "Apple");
        assert_eq!(item.match_key(), "Apple ");
    }

    #[test]
    fn test_match_key_with_record_value() {
        let item = Item::new("a", json!({"name": "x"}));
        assert_eq!(item.match_key(), r#"{"name":"x"} "#);
    }

    #[test]
    fn test_collection_document_shapes() {
        let flat: ItemCollection =
            serde_json::from_value(json!({"flat": [{"id": "a", "value": "Apple"}]})).unwrap();
        assert!(!flat.is_grouped());
        assert_eq!(flat.len(), 1);

        let grouped: ItemCollection = serde_json::from_value(json!({
            "grouped": [{
                "id": "fruit",
                "value": "Fruit",
                "hideGroupLabel": true,
                "items": [{"id": "a", "value": "Apple", "searchKey": "apple"}]
            }]
        }))
        .unwrap();

        let ItemCollection::Grouped(groups) = &grouped else {
            panic!("expected grouped collection");
        };
        assert!(groups[0].hide_group_label);
        assert_eq!(groups[0].header.id, "fruit");
        assert!(groups[0].header.extra.is_empty());
        assert_eq!(groups[0].items[0].search_key.as_deref(), Some("apple"));
    }

    #[test]
    fn test_extra_fields_round_trip() {
        let item: Item =
            serde_json::from_value(json!({"id": "a", "value": "Apple", "color": "red"})).unwrap();
        assert_eq!(item.field_as_string("color").as_deref(), Some("red"));

        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back, json!({"id": "a", "value": "Apple", "color": "red"}));
    }

    #[test]
    fn test_filtered_entry_serializes_flat() {
        let entry = FilteredEntry::Item(IndexedItem {
            item: Item::new("b", "Banana"),
            index: 0,
        });
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({"id": "b", "value": "Banana", "index": 0})
        );
    }
}
