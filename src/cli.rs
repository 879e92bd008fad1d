use clap::Parser;
use dropac_core::{HeightConfig, MenuOptions, DEFAULT_EMPTY_MESSAGE, DEFAULT_ITEM_HEIGHT, DEFAULT_MAX_HEIGHT};
use std::path::PathBuf;

/// Dropdown autocomplete - filter item collections the way an autocomplete menu does
///
/// Examples:
///   # Show every item
///   dropac items.json
///
///   # Filter by a case-insensitive substring
///   dropac items.json --query ban
///
///   # Group a flat collection by an item field
///   dropac items.json --group-by kind --query a
///
///   # Size the list for a virtualized menu with 24px rows and 16px labels
///   dropac items.json --item-height 24 --label-height 16 --max-height 200
///
///   # Type queries and move the highlight line by line
///   dropac items.json --interactive
#[derive(Parser, Debug)]
#[command(name = "dropac")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Document format:\n  \
    - {\"flat\": [item, ...]} or {\"grouped\": [group, ...]}\n  \
    - item: {\"id\", \"value\", \"label\"?, \"searchKey\"?}\n  \
    - group: item fields plus {\"items\": [item, ...], \"hideGroupLabel\"?}\n\n\
Matching:\n  \
    - Case-insensitive substring of searchKey, or of \"value label\" when there is none\n  \
    - Group labels are shown above their matching items unless hideGroupLabel is set\n\n\
Interactive commands:\n  \
    - any text: replace the query\n  \
    - :up / :down: move the highlight\n  \
    - :select: print the highlighted item\n  \
    - :clear: empty the query\n  \
    - :quit: exit")]
pub struct Cli {
    /// Path to the item collection JSON file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Text typed into the filter input
    #[arg(short, long, value_name = "TEXT", default_value = "")]
    pub query: String,

    /// Filter with this value instead of the query
    #[arg(long, value_name = "TEXT")]
    pub filter_value: Option<String>,

    /// Group a flat collection by an item field
    #[arg(short = 'G', long = "group-by", value_name = "FIELD")]
    pub group_by: Option<String>,

    /// Maximum list height in pixels
    #[arg(long, env = "DROPAC_MAX_HEIGHT", default_value_t = DEFAULT_MAX_HEIGHT)]
    pub max_height: u32,

    /// Row height in pixels for the virtualized list
    #[arg(long, env = "DROPAC_ITEM_HEIGHT", default_value_t = DEFAULT_ITEM_HEIGHT)]
    pub item_height: u32,

    /// Group label row height in pixels (defaults to the row height)
    #[arg(long, env = "DROPAC_LABEL_HEIGHT")]
    pub label_height: Option<u32>,

    /// Message shown when there are no items
    #[arg(long, value_name = "TEXT", default_value = DEFAULT_EMPTY_MESSAGE)]
    pub empty_message: String,

    /// Message shown when nothing matches the query
    #[arg(long, value_name = "TEXT")]
    pub no_results_message: Option<String>,

    /// Print the filtered entries as JSON
    #[arg(long)]
    pub json: bool,

    /// Read queries and commands from stdin
    #[arg(short, long)]
    pub interactive: bool,

    /// Skip collection validation (ids present and unique)
    #[arg(long)]
    pub no_validate: bool,

    /// Debug-level logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Errors only
    #[arg(long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn height_config(&self) -> HeightConfig {
        HeightConfig {
            max_height: self.max_height,
            item_height: self.item_height,
            label_height: self.label_height,
        }
    }

    /// Menu options for an open menu sized as a virtualized list
    pub fn menu_options(&self) -> MenuOptions {
        MenuOptions {
            max_height: self.max_height,
            empty_message: self.empty_message.clone(),
            no_results_message: self.no_results_message.clone(),
            is_open: true,
            filter_value: self.filter_value.clone(),
            virtualized: Some(self.height_config()),
            ..MenuOptions::default()
        }
    }
}
