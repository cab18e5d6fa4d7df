//! Rendering of evaluated projects.
use super::ui;
use crate::core::yields::{self, Evaluation, ProjectInputs};
use anyhow::Result;
use comfy_table::{Attribute, Cell, CellAlignment};
use serde::Serialize;

/// An evaluated project together with the labels needed to display it.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectReport {
    pub name: String,
    pub currency: String,
    #[serde(flatten)]
    pub evaluation: Evaluation,
}

impl ProjectReport {
    pub fn new(name: &str, currency: &str, inputs: &ProjectInputs, offsets: &[i32]) -> Self {
        ProjectReport {
            name: name.to_string(),
            currency: currency.to_string(),
            evaluation: yields::evaluate(inputs, offsets),
        }
    }
}

/// The yield formula with the project's figures substituted.
pub fn formula_line(evaluation: &Evaluation) -> String {
    format!(
        "Development Yield (%) = {} / {} × 100 = {:.2}%",
        ui::format_amount(evaluation.inputs.annual_rent),
        ui::format_amount(evaluation.result.total_development_cost),
        evaluation.result.development_yield_percent
    )
}

pub fn display(report: &ProjectReport) {
    let evaluation = &report.evaluation;

    println!(
        "\nProject: {}",
        ui::style_text(&report.name, ui::StyleType::Title)
    );
    println!("{}", results_table(report));
    println!("{}", ui::style_text(&formula_line(evaluation), ui::StyleType::Subtle));
    println!("\n{}", ui::banner(evaluation.band));

    if !evaluation.sensitivity.is_empty() {
        println!(
            "\n{}",
            ui::style_text("Yield Sensitivity to Rent", ui::StyleType::TotalLabel)
        );
        println!("{}", sensitivity_table(report));
    }
}

fn results_table(report: &ProjectReport) -> comfy_table::Table {
    let evaluation = &report.evaluation;
    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Metric"), ui::header_cell("Value")]);

    let inputs = &evaluation.inputs;
    for (label, value) in [
        ("Land Cost", inputs.land_cost),
        ("Construction Cost", inputs.construction_cost),
        ("Professional Fees", inputs.professional_fees),
        ("Other Costs", inputs.other_costs),
    ] {
        table.add_row(vec![Cell::new(label), ui::amount_cell(value, &report.currency)]);
    }

    table.add_row(vec![
        Cell::new("Total Development Cost").add_attribute(Attribute::Bold),
        ui::amount_cell(evaluation.result.total_development_cost, &report.currency)
            .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Annual Rent"),
        ui::amount_cell(inputs.annual_rent, &report.currency),
    ]);
    table.add_row(vec![
        Cell::new("Development Yield").add_attribute(Attribute::Bold),
        ui::format_percentage_cell(evaluation.result.development_yield_percent, evaluation.band),
    ]);
    table
}

fn sensitivity_table(report: &ProjectReport) -> comfy_table::Table {
    let points = &report.evaluation.sensitivity;
    let max_yield = points
        .iter()
        .map(|p| p.yield_percent)
        .fold(0.0_f64, f64::max);

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Rent Change"),
        ui::header_cell(&format!("Annual Rent ({})", report.currency)),
        ui::header_cell("Yield (%)"),
        ui::header_cell(""),
    ]);

    for point in points {
        let offset = Cell::new(format!("{:+}%", point.offset_percent))
            .set_alignment(CellAlignment::Right);
        let offset = if point.offset_percent == 0 {
            offset.add_attribute(Attribute::Bold)
        } else {
            offset
        };
        table.add_row(vec![
            offset,
            Cell::new(ui::format_amount(point.rent_value)).set_alignment(CellAlignment::Right),
            ui::percent_cell(point.yield_percent),
            Cell::new(ui::bar(point.yield_percent, max_yield, ui::BAR_WIDTH))
                .fg(comfy_table::Color::Blue),
        ]);
    }
    table
}

/// Side-by-side view of several projects.
pub fn display_comparison(reports: &[ProjectReport]) {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Project"),
        ui::header_cell("Total Development Cost"),
        ui::header_cell("Annual Rent"),
        ui::header_cell("Yield (%)"),
        ui::header_cell("Band"),
    ]);

    for report in reports {
        let evaluation = &report.evaluation;
        table.add_row(vec![
            Cell::new(&report.name),
            ui::amount_cell(evaluation.result.total_development_cost, &report.currency),
            ui::amount_cell(evaluation.inputs.annual_rent, &report.currency),
            ui::format_percentage_cell(evaluation.result.development_yield_percent, evaluation.band),
            ui::band_cell(evaluation.band),
        ]);
    }

    println!(
        "\n{}",
        ui::style_text("Project Comparison", ui::StyleType::Title)
    );
    println!("{table}");
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
