use super::ui;
use crate::core::yields::{MODERATE_THRESHOLD, STRONG_THRESHOLD};

const FORMULA: &str = "Development Yield (%) = Annual Rent / Total Development Cost × 100";

/// Prints a short explanation of development yield and its typical ranges.
pub fn run() {
    println!(
        "\n{}",
        ui::style_text("Development Yield", ui::StyleType::Title)
    );
    println!(
        "Development yield measures how much rental income a completed property produces \
         each year, compared to the total cost of developing it.\n"
    );
    println!("{}\n", ui::style_text(FORMULA, ui::StyleType::TotalLabel));
    println!("  - Higher yield: better return on development cost");
    println!("  - Lower yield: lower return or higher project risk");
    println!("  - Used by developers, investors, and banks to assess project viability\n");

    println!("{}", ui::style_text("Typical ranges", ui::StyleType::TotalLabel));
    println!("  - below {MODERATE_THRESHOLD}%: low yield");
    println!("  - {MODERATE_THRESHOLD}% to {STRONG_THRESHOLD}%: moderate yield (common for residential)");
    println!("  - above {STRONG_THRESHOLD}%: high yield (often commercial or value-add projects)");
}
