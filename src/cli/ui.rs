use crate::core::YieldBand;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;

/// Width, in characters, of the longest bar in a sensitivity chart.
pub const BAR_WIDTH: usize = 30;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    TotalLabel,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::TotalLabel => style(text).bold(),
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

/// Formats a currency amount with thousands separators and no decimals.
pub fn format_amount(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Right-aligned cell holding an amount in `currency`.
pub fn amount_cell(value: f64, currency: &str) -> Cell {
    Cell::new(format!("{} {currency}", format_amount(value))).set_alignment(CellAlignment::Right)
}

/// Right-aligned percentage cell with two decimals.
pub fn percent_cell(value: f64) -> Cell {
    Cell::new(format!("{value:.2} %")).set_alignment(CellAlignment::Right)
}

fn band_color(band: YieldBand) -> Color {
    match band {
        YieldBand::Low => Color::Red,
        YieldBand::Moderate => Color::Yellow,
        YieldBand::Strong => Color::Green,
    }
}

/// Cell naming a yield band, coloured by its interpretation.
pub fn band_cell(band: YieldBand) -> Cell {
    Cell::new(band.to_string())
        .fg(band_color(band))
        .add_attribute(Attribute::Bold)
}

/// Creates the bold yield cell used for the headline figure.
pub fn format_percentage_cell(value: f64, band: YieldBand) -> Cell {
    Cell::new(format!("{value:.2} %"))
        .add_attribute(Attribute::Bold)
        .fg(band_color(band))
        .set_alignment(CellAlignment::Right)
}

/// Interpretation banner for `band`.
pub fn banner(band: YieldBand) -> String {
    let styled = match band {
        YieldBand::Low => style(band.message()).red().bold(),
        YieldBand::Moderate => style(band.message()).yellow().bold(),
        YieldBand::Strong => style(band.message()).green().bold(),
    };
    styled.to_string()
}

/// Horizontal bar proportional to `value / max`, at most `width` characters.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let filled = ((value / max) * width as f64).round() as usize;
    "█".repeat(filled.min(width))
}

/// Prints a separator line matching the terminal width.
pub fn print_separator() {
    let term_width = console::Term::stdout()
        .size_checked()
        .map(|(_, w)| w as usize)
        .unwrap_or(80);
    println!("\n{}", "─".repeat(term_width));
}
