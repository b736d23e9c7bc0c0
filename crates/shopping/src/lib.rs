pub mod aggregator;
pub mod export;

pub use aggregator::{ShoppingList, ShoppingListAggregator};
pub use export::{DOWNLOAD_FILENAME, DOWNLOAD_MIME, to_downloadable_text};
