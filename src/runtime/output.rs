use mediatrie::{FolderIndex, Item};

fn kind(item: &Item) -> &'static str {
    if item.is_playable() { "track" } else { "folder" }
}

/// One line per item: kind, id, title and, for tracks, artist and locator.
pub fn item_line(item: &Item) -> String {
    let mut line = format!("[{}] {}  {}", kind(item), item.id(), item.title());
    if let Some(artist) = item.artist() {
        line.push_str(&format!(" ({artist})"));
    }
    if let Some(locator) = item.source_locator() {
        line.push_str("  ");
        line.push_str(locator);
    }
    line
}

/// Indented folder hierarchy with the item count of each folder.
pub fn tree_lines(index: &FolderIndex) -> Vec<String> {
    index
        .walk()
        .map(|(depth, node)| {
            let count = node.load_children().len();
            format!(
                "{}{}  {} ({} items)",
                "  ".repeat(depth),
                node.item().id(),
                node.item().title(),
                count
            )
        })
        .collect()
}
