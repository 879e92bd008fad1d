use crate::models::FilteredEntry;
use serde::{Deserialize, Serialize};

/// Default menu height cap in pixels
pub const DEFAULT_MAX_HEIGHT: u32 = 300;

/// Default fixed row height in pixels
pub const DEFAULT_ITEM_HEIGHT: u32 = 36;

/// Pixel sizes used to pre-size a virtualized list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeightConfig {
    pub max_height: u32,
    pub item_height: u32,
    /// Height of group label rows; `None` or zero means labels use `item_height`
    pub label_height: Option<u32>,
}

impl Default for HeightConfig {
    fn default() -> Self {
        Self {
            max_height: DEFAULT_MAX_HEIGHT,
            item_height: DEFAULT_ITEM_HEIGHT,
            label_height: None,
        }
    }
}

impl HeightConfig {
    /// Label height when one distinct from the item height is configured
    fn distinct_label_height(&self) -> Option<u32> {
        self.label_height.filter(|height| *height > 0)
    }
}

/// Estimate the container height for a list of filtered entries, clamped to `max_height`
pub fn estimate_height(entries: &[FilteredEntry], config: &HeightConfig) -> u32 {
    let total = match config.distinct_label_height() {
        Some(label_height) => entries.iter().fold(0u32, |total, entry| {
            let row = if entry.is_group_label() {
                label_height
            } else {
                config.item_height
            };
            total.saturating_add(row)
        }),
        None => u32::try_from(entries.len())
            .unwrap_or(u32::MAX)
            .saturating_mul(config.item_height),
    };

    let height = total.min(config.max_height);
    tracing::debug!(rows = entries.len(), total, height, "estimated list height");
    height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Group, IndexedItem, Item};

    fn rows(count: usize) -> Vec<FilteredEntry> {
        (0..count)
            .map(|index| {
                FilteredEntry::Item(IndexedItem {
                    item: Item::new(format!("item-{index}"), "value"),
                    index,
                })
            })
            .collect()
    }

    fn label() -> FilteredEntry {
        let mut group = Group::new(Item::new("group", "Group"), Vec::new());
        group.header.group_label = true;
        FilteredEntry::GroupLabel(group)
    }

    fn config(max_height: u32, item_height: u32, label_height: Option<u32>) -> HeightConfig {
        HeightConfig {
            max_height,
            item_height,
            label_height,
        }
    }

    #[test]
    fn test_height_is_clamped() {
        assert_eq!(estimate_height(&rows(10), &config(200, 30, None)), 200);
    }

    #[test]
    fn test_height_under_limit() {
        assert_eq!(estimate_height(&rows(3), &config(200, 30, None)), 90);
    }

    #[test]
    fn test_empty_list_has_zero_height() {
        assert_eq!(estimate_height(&[], &HeightConfig::default()), 0);
    }

    #[test]
    fn test_label_rows_use_label_height() {
        let mut entries = vec![label()];
        entries.extend(rows(2));

        assert_eq!(estimate_height(&entries, &config(500, 30, Some(20))), 80);
    }

    #[test]
    fn test_without_label_height_labels_count_as_items() {
        let mut entries = vec![label()];
        entries.extend(rows(2));

        assert_eq!(estimate_height(&entries, &config(500, 30, None)), 90);
        assert_eq!(estimate_height(&entries, &config(500, 30, Some(0))), 90);
    }

    #[test]
    fn test_large_heights_saturate() {
        assert_eq!(estimate_height(&rows(4), &config(u32::MAX, u32::MAX, None)), u32::MAX);
        assert_eq!(estimate_height(&rows(4), &config(100, u32::MAX, Some(1))), 100);
    }

    #[test]
    fn test_config_defaults_from_partial_json() {
        let parsed: HeightConfig = serde_json::from_str(r#"{"itemHeight": 24}"#).unwrap();
        assert_eq!(parsed, config(DEFAULT_MAX_HEIGHT, 24, None));
    }
}
