use mealboard_shared::Ingredient;

pub const DOWNLOAD_FILENAME: &str = "shopping-list.txt";
pub const DOWNLOAD_MIME: &str = "text/plain";

/// Renders one `- <name> (<quantity>)` line per entry, newline separated,
/// without a trailing newline.
pub fn to_downloadable_text(entries: &[Ingredient]) -> String {
    entries
        .iter()
        .map(|item| format!("- {} ({})", item.name, item.quantity))
        .collect::<Vec<_>>()
        .join("\n")
}
