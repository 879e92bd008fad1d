//! Render-time decisions of the autocomplete dropdown menu.
//!
//! A menu re-derives its [`MenuState`] from the current items and input text
//! on every change. Nothing here draws anything; the rendering layer reads
//! the flags and messages and lays out rows from [`MenuState::results`].

use crate::filtering::{autocomplete_filter, selectable_count};
use crate::models::{FilteredEntry, ItemCollection};
use crate::sizing::{estimate_height, HeightConfig, DEFAULT_MAX_HEIGHT};
use serde::{Deserialize, Serialize};

pub const DEFAULT_EMPTY_MESSAGE: &str = "No items";

/// Options a menu is configured with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuOptions {
    pub max_height: u32,
    /// Shown when there are no items at all
    pub empty_message: String,
    /// Shown when a search matched nothing; defaults to "{empty_message} found"
    pub no_results_message: Option<String>,
    /// Results are being fetched; the list is replaced by a busy message
    pub busy: bool,
    /// Results are being fetched but the current list stays visible
    pub busy_items_still_visible: bool,
    pub hide_input: bool,
    /// Hide the input when there is nothing to filter
    pub empty_hides_input: bool,
    pub is_open: bool,
    /// Filter with this instead of the typed input, e.g. after stripping characters
    pub filter_value: Option<String>,
    /// Fixed row heights for a virtualized list
    pub virtualized: Option<HeightConfig>,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            max_height: DEFAULT_MAX_HEIGHT,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            no_results_message: None,
            busy: false,
            busy_items_still_visible: false,
            hide_input: false,
            empty_hides_input: false,
            is_open: false,
            filter_value: None,
            virtualized: None,
        }
    }
}

/// Everything a menu needs to decide before it renders
#[derive(Debug, Clone, PartialEq)]
pub struct MenuState {
    /// Text the items were filtered with
    pub filter_value: String,
    pub results: Vec<FilteredEntry>,
    pub has_items: bool,
    /// Items have not arrived yet
    pub items_loading: bool,
    pub show_no_items: bool,
    /// Message to show when a search found nothing
    pub no_results_message: Option<String>,
    pub show_input: bool,
    pub show_busy: bool,
    pub show_spinner: bool,
    /// Selectable rows, for arrow-key limits in a virtualized list
    pub item_count: Option<usize>,
    /// Pre-computed container height for a virtualized list
    pub list_height: Option<u32>,
}

impl MenuState {
    /// Derive the menu state; `items` is `None` while they are still loading
    pub fn derive(items: Option<&ItemCollection>, input_value: &str, options: &MenuOptions) -> Self {
        let filter_value = options.filter_value.as_deref().unwrap_or(input_value).to_string();

        let results = match items {
            Some(items) if options.is_open => autocomplete_filter(items, &filter_value),
            _ => Vec::new(),
        };

        let has_items = items.is_some_and(|items| !items.is_empty());
        let has_results = !results.is_empty();
        let searching = !filter_value.is_empty();

        let show_no_items = !options.busy && !searching && !has_items;

        let no_results_message = (!options.busy
            && !options.busy_items_still_visible
            && searching
            && !has_results)
            .then(|| {
                options
                    .no_results_message
                    .clone()
                    .unwrap_or_else(|| format!("{} found", options.empty_message))
            });

        let show_input = !options.hide_input && (has_items || !options.empty_hides_input);

        let (item_count, list_height) = match &options.virtualized {
            Some(config) => {
                let config = HeightConfig {
                    max_height: config.max_height.min(options.max_height),
                    ..*config
                };
                (
                    Some(selectable_count(&results)),
                    Some(estimate_height(&results, &config)),
                )
            }
            None => (None, None),
        };

        Self {
            filter_value,
            results,
            has_items,
            items_loading: items.is_none(),
            show_no_items,
            no_results_message,
            show_input,
            show_busy: options.busy,
            show_spinner: options.busy || options.busy_items_still_visible,
            item_count,
            list_height,
        }
    }

    /// Message the list area should show instead of rows, if any
    pub fn message<'a>(&'a self, options: &'a MenuOptions) -> Option<&'a str> {
        if self.show_no_items {
            Some(&options.empty_message)
        } else if self.show_busy {
            Some("Searching...")
        } else {
            self.no_results_message.as_deref()
        }
    }
}

/// Find the selectable entry carrying `index`
pub fn entry_for_index(entries: &[FilteredEntry], index: usize) -> Option<&FilteredEntry> {
    entries.iter().find(|entry| entry.index() == Some(index))
}

/// Keyboard highlight over the selectable entries of a result list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Highlight {
    pub index: Option<usize>,
}

impl Highlight {
    /// Move the highlight by `delta` rows, wrapping at both ends
    ///
    /// With nothing highlighted, moving down starts at the first row and
    /// moving up at the last one.
    pub fn move_by(self, delta: isize, count: usize) -> Self {
        if count == 0 {
            return Self { index: None };
        }

        let count = count as isize;
        let next = match self.index {
            Some(current) => (current as isize + delta).rem_euclid(count),
            None if delta < 0 => (count + delta).rem_euclid(count),
            None => (delta - 1).max(0).rem_euclid(count),
        };

        Self {
            index: Some(next as usize),
        }
    }

    /// Drop a highlight that no longer points at a row
    pub fn clamp(self, count: usize) -> Self {
        Self {
            index: self.index.filter(|index| *index < count),
        }
    }

    pub fn entry<'a>(&self, entries: &'a [FilteredEntry]) -> Option<&'a FilteredEntry> {
        entry_for_index(entries, self.index?)
    }
}
