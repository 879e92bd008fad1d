use dropac_core::*;
use std::path::PathBuf;

/// Application state: the loaded collection, the menu configuration and
/// what the user has typed and highlighted so far
#[derive(Debug)]
pub struct AppState {
    /// Currently loaded collection; `None` until a file is loaded
    pub collection: Option<ItemCollection>,
    /// Path to current collection file
    pub current_file: Option<PathBuf>,
    pub options: MenuOptions,
    /// Text typed into the filter input
    pub query: String,
    pub highlight: Highlight,
}

impl AppState {
    pub fn new(options: MenuOptions) -> Self {
        Self {
            collection: None,
            current_file: None,
            options,
            query: String::new(),
            highlight: Highlight::default(),
        }
    }

    /// Load a collection file, optionally rejecting invalid collections
    pub fn load_from_file(&mut self, path: PathBuf, validate: bool) -> Result<(), LoadError> {
        let collection = if validate {
            load_validated_collection(&path)?
        } else {
            load_collection(&path)?
        };

        self.collection = Some(collection);
        self.current_file = Some(path);
        self.highlight = Highlight::default();

        Ok(())
    }

    /// Regroup a flat collection by an item field
    /// Returns false when there is nothing flat to regroup
    pub fn group_by(&mut self, field: &str) -> bool {
        match &self.collection {
            Some(ItemCollection::Flat(items)) => {
                self.collection = Some(group_by_field(items, field));
                true
            }
            _ => false,
        }
    }

    /// Replace the query; the highlight starts over
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.highlight = Highlight::default();
    }

    pub fn menu_state(&self) -> MenuState {
        MenuState::derive(self.collection.as_ref(), &self.query, &self.options)
    }

    /// Move the highlight over the current results
    pub fn move_highlight(&mut self, delta: isize) {
        let count = selectable_count(&self.menu_state().results);
        self.highlight = self.highlight.clamp(count).move_by(delta, count);
    }

    /// The highlighted item, if any
    pub fn selected(&self) -> Option<Item> {
        let state = self.menu_state();
        self.highlight.entry(&state.results).map(|entry| entry.item().clone())
    }

    /// Display name of the loaded file
    pub fn get_title(&self) -> String {
        let file_name = self
            .current_file
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or("Untitled");

        format!("dropac - {}", file_name)
    }
}
