use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;
use rust_decimal::Decimal;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    TotalLabel,
    TotalValue,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::TotalLabel => style(text).bold(),
        StyleType::TotalValue => style(text).green().bold(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Right-aligned money cell with two decimal places.
pub fn money_cell(value: Decimal) -> Cell {
    Cell::new(format_money(value)).set_alignment(CellAlignment::Right)
}

/// Right-aligned count cell.
pub fn count_cell(value: usize) -> Cell {
    Cell::new(value.to_string()).set_alignment(CellAlignment::Right)
}

/// Percentage cell, color coded by sign.
pub fn percent_cell(value: Decimal) -> Cell {
    let text = format!("{}%", value.round_dp(2));
    let color = if value >= Decimal::ZERO {
        Color::Green
    } else {
        Color::Red
    };
    Cell::new(text)
        .fg(color)
        .set_alignment(CellAlignment::Right)
}

/// Money rendered with two decimal places.
pub fn format_money(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}
