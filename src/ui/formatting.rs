use colored::Colorize;
use dropac_core::{FilteredEntry, Highlight, Item, MenuOptions, MenuState};

/// Format one result row; labels are bold headings, items are indented with their index
pub fn format_entry(entry: &FilteredEntry, highlight: Highlight) -> String {
    let item = entry.item();
    let text = display_text(item);

    match entry.index() {
        None => format!("{}", text.bold().underline()),
        Some(index) => {
            let row = format!("  {:>3}  {}", index, text);
            if highlight.index == Some(index) {
                format!("{}", row.reversed())
            } else {
                row
            }
        }
    }
}

/// Format the whole menu: input line, status, rows and sizing footer
pub fn format_menu(title: &str, state: &MenuState, options: &MenuOptions, highlight: Highlight) -> String {
    let mut lines = vec![format!("# {}", title)];

    if state.show_input {
        let input = if state.filter_value.is_empty() {
            "Filter search".dimmed().to_string()
        } else {
            state.filter_value.clone()
        };
        lines.push(format!("> {}", input));
    }

    if state.items_loading {
        lines.push("Loading...".dimmed().to_string());
    }

    if let Some(message) = state.message(options) {
        lines.push(message.dimmed().to_string());
    }

    if !state.show_busy {
        lines.extend(state.results.iter().map(|entry| format_entry(entry, highlight)));
    }

    let mut footer = Vec::new();
    if let Some(count) = state.item_count {
        footer.push(format!("{} selectable", count));
    }
    if let Some(height) = state.list_height {
        footer.push(format!("{}px", height));
    }
    if !footer.is_empty() {
        lines.push(String::new());
        lines.push(footer.join(", ").dimmed().to_string());
    }

    lines.join("\n")
}

/// Format a selected item with all of its fields
pub fn format_selection(item: &Item) -> String {
    let mut lines = vec![format!("{} {}", "Selected:".green().bold(), display_text(item))];
    lines.push(format!("  id: {}", item.id));

    if let Some(search_key) = &item.search_key {
        lines.push(format!("  searchKey: {}", search_key));
    }

    let mut extra: Vec<_> = item.extra.iter().collect();
    extra.sort_by_key(|(name, _)| *name);
    for (name, value) in extra {
        lines.push(format!("  {}: {}", name, value));
    }

    lines.join("\n")
}

/// Label when there is one, otherwise the value text
fn display_text(item: &Item) -> String {
    match item.label.as_deref() {
        Some(label) if !label.is_empty() => label.to_string(),
        _ => item.value_text().into_owned(),
    }
}
