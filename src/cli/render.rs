//! Grouped listing of the expense store.

use colored::Colorize;

use crate::{
    currency::format_currency,
    domain::{AmountTier, ExpenseItem, BUILT_IN_CATEGORIES},
    storage::KeyValueStore,
    store::Expenses,
};

/// Sections in display order: built-in categories first, then any others in
/// order of first appearance.
pub fn section_order<S: KeyValueStore>(expenses: &Expenses<S>) -> Vec<String> {
    let mut sections: Vec<String> = BUILT_IN_CATEGORIES.iter().map(|c| c.to_string()).collect();
    for category in expenses.categories() {
        if !sections.iter().any(|existing| existing == category) {
            sections.push(category.to_string());
        }
    }
    sections
}

/// Renders every section with its rows. Row numbers are the filtered positions
/// accepted by `delete`.
pub fn render_listing<S: KeyValueStore>(
    expenses: &Expenses<S>,
    currency: &str,
    color: bool,
) -> String {
    let mut out = String::new();
    for section in section_order(expenses) {
        let header = format!("=== {} ===", section);
        if color {
            out.push_str(&header.bold().to_string());
        } else {
            out.push_str(&header);
        }
        out.push('\n');

        let rows: Vec<&ExpenseItem> = expenses.in_category(&section).collect();
        if rows.is_empty() {
            out.push_str("  (none)\n");
            continue;
        }
        for (position, item) in rows.into_iter().enumerate() {
            out.push_str(&render_row(position, item, currency, color));
            out.push('\n');
        }
    }
    out
}

fn render_row(position: usize, item: &ExpenseItem, currency: &str, color: bool) -> String {
    let amount = format_currency(item.amount, currency);
    let amount = if color {
        style_amount(&amount, item.tier())
    } else {
        amount
    };
    format!(
        "  [{}] {:<24} {:<10} {}",
        position, item.name, item.category, amount
    )
}

/// Applies the magnitude color and weight to an already formatted amount.
pub fn style_amount(text: &str, tier: AmountTier) -> String {
    match tier {
        AmountTier::Low => text.green().dimmed().to_string(),
        AmountTier::Medium => text.yellow().to_string(),
        AmountTier::High => text.red().bold().to_string(),
    }
}
