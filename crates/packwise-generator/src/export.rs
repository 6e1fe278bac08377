//! # Plain-Text Export
//!
//! Flattens a [`PackingList`] into a checklist:
//!
//! ```text
//! CLOTHES
//! [ ] Socks (×3) *
//! [x] Sleepwear
//!
//! DOCUMENTS
//! [ ] Passport/ID *
//! ```
//!
//! One heading per category (key upper-cased, `_` rendered as a space), one
//! line per item, `(×N)` when more than one unit is needed and `*` for
//! essentials. Categories are separated by a blank line.

use packwise_core::{GeneratedItem, PackingList};

/// Render a category key as a heading.
pub fn category_heading(key: &str) -> String {
    key.replace('_', " ").to_uppercase()
}

/// Render one checklist line.
pub fn checklist_line(name: &str, item: &GeneratedItem) -> String {
    let mut line = format!("[{}] {name}", if item.completed { 'x' } else { ' ' });
    if item.quantity > 1 {
        line.push_str(&format!(" (×{})", item.quantity));
    }
    if item.essential {
        line.push_str(" *");
    }
    line
}

/// Render the whole list.
pub fn to_checklist(list: &PackingList) -> String {
    list.categories()
        .map(|(key, items)| {
            let mut block = vec![category_heading(key)];
            block.extend(items.iter().map(|(name, item)| checklist_line(name, item)));
            block.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
