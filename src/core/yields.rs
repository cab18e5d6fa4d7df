//! Development yield calculations.
//!
//! Everything here is a pure function of its arguments: a project's inputs map
//! to a total cost, a yield percentage, a [`YieldBand`] and a rent sensitivity
//! sweep.
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::debug;

/// Rent offsets, in percent, used by [`compute_sensitivity`].
pub const SENSITIVITY_OFFSETS: [i32; 11] = [-25, -20, -15, -10, -5, 0, 5, 10, 15, 20, 25];

/// Yields below this percentage are classified as [`YieldBand::Low`].
pub const MODERATE_THRESHOLD: f64 = 6.0;
/// Yields above this percentage are classified as [`YieldBand::Strong`].
pub const STRONG_THRESHOLD: f64 = 8.0;

/// Widest rent sweep, in percent. Beyond it the lowest rent would be negative.
pub const MAX_SWEEP_RANGE_PERCENT: u32 = 100;

/// Cost and income figures of a single development project, in currency units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectInputs {
    #[serde(default)]
    pub land_cost: f64,
    #[serde(default)]
    pub construction_cost: f64,
    #[serde(default)]
    pub professional_fees: f64,
    #[serde(default)]
    pub other_costs: f64,
    #[serde(default)]
    pub annual_rent: f64,
}

impl Default for ProjectInputs {
    fn default() -> Self {
        ProjectInputs {
            land_cost: 6_000_000.0,
            construction_cost: 10_000_000.0,
            professional_fees: 1_000_000.0,
            other_costs: 500_000.0,
            annual_rent: 1_400_000.0,
        }
    }
}

impl ProjectInputs {
    fn fields(&self) -> [(&'static str, f64); 5] {
        [
            ("land_cost", self.land_cost),
            ("construction_cost", self.construction_cost),
            ("professional_fees", self.professional_fees),
            ("other_costs", self.other_costs),
            ("annual_rent", self.annual_rent),
        ]
    }

    /// Ensures every field is a finite, non-negative number.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in self.fields() {
            if !value.is_finite() {
                bail!("{name} must be a finite number, got {value}");
            }
            if value < 0.0 {
                bail!("{name} must not be negative, got {value}");
            }
        }
        Ok(())
    }
}

/// Total cost and resulting yield of a project.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldResult {
    pub total_development_cost: f64,
    pub development_yield_percent: f64,
}

/// Yield obtained at one rent level of a sensitivity sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivityPoint {
    pub offset_percent: i32,
    pub rent_value: f64,
    pub yield_percent: f64,
}

/// Interpretation of a yield percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YieldBand {
    Low,
    Moderate,
    Strong,
}

impl Display for YieldBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                YieldBand::Low => "Low",
                YieldBand::Moderate => "Moderate",
                YieldBand::Strong => "Strong",
            }
        )
    }
}

impl YieldBand {
    /// Banner text shown alongside a result in this band.
    pub fn message(&self) -> &'static str {
        match self {
            YieldBand::Low => "Low yield (<6%): may only work in premium or low-risk areas.",
            YieldBand::Moderate => "Moderate yield (6-8%): typical for residential projects.",
            YieldBand::Strong => "Strong yield (>8%): good return for most developments!",
        }
    }
}

/// Everything computed for one set of project inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub inputs: ProjectInputs,
    pub result: YieldResult,
    pub band: YieldBand,
    pub sensitivity: Vec<SensitivityPoint>,
}

/// Sum of the four cost components.
pub fn compute_total_cost(inputs: &ProjectInputs) -> f64 {
    inputs.land_cost + inputs.construction_cost + inputs.professional_fees + inputs.other_costs
}

/// Annual rent as a percentage of total cost. A zero total cost yields 0.
pub fn compute_yield(annual_rent: f64, total_cost: f64) -> f64 {
    if total_cost > 0.0 {
        (annual_rent / total_cost) * 100.0
    } else {
        0.0
    }
}

/// Yield at rent levels from -25% to +25% of `annual_rent`, in 5% steps.
pub fn compute_sensitivity(annual_rent: f64, total_cost: f64) -> Vec<SensitivityPoint> {
    compute_sensitivity_over(annual_rent, total_cost, &SENSITIVITY_OFFSETS)
}

/// Yield at each rent offset in `offsets`, preserving their order.
pub fn compute_sensitivity_over(
    annual_rent: f64,
    total_cost: f64,
    offsets: &[i32],
) -> Vec<SensitivityPoint> {
    offsets
        .iter()
        .map(|&offset| {
            let rent_value = annual_rent * (1.0 + f64::from(offset) / 100.0);
            SensitivityPoint {
                offset_percent: offset,
                rent_value,
                yield_percent: compute_yield(rent_value, total_cost),
            }
        })
        .collect()
}

pub fn classify_yield(yield_percent: f64) -> YieldBand {
    if yield_percent < MODERATE_THRESHOLD {
        YieldBand::Low
    } else if yield_percent <= STRONG_THRESHOLD {
        YieldBand::Moderate
    } else {
        YieldBand::Strong
    }
}

/// Offsets from `-range_percent` to `range_percent`, built outward from 0 in
/// `step_percent` increments.
///
/// The 0% baseline and both ends are always present, even when the step does
/// not divide the range. The range is capped at [`MAX_SWEEP_RANGE_PERCENT`] so
/// swept rents never go negative. A zero step or range produces only 0%.
pub fn sweep_offsets(range_percent: u32, step_percent: u32) -> Vec<i32> {
    let range = range_percent.min(MAX_SWEEP_RANGE_PERCENT);
    if range == 0 || step_percent == 0 {
        return vec![0];
    }
    let step = step_percent.min(range);

    let mut upper: Vec<i32> = (step..range)
        .step_by(step as usize)
        .filter_map(|offset| i32::try_from(offset).ok())
        .collect();
    upper.extend(i32::try_from(range).ok());

    let mut offsets: Vec<i32> = upper.iter().rev().map(|offset| -offset).collect();
    offsets.push(0);
    offsets.extend(upper);
    offsets
}

/// Runs the full calculation for `inputs`, sweeping rent over `offsets`.
pub fn evaluate(inputs: &ProjectInputs, offsets: &[i32]) -> Evaluation {
    let total_development_cost = compute_total_cost(inputs);
    let development_yield_percent = compute_yield(inputs.annual_rent, total_development_cost);
    let band = classify_yield(development_yield_percent);
    debug!(
        total_development_cost,
        development_yield_percent,
        %band,
        "Evaluated project"
    );

    Evaluation {
        inputs: *inputs,
        result: YieldResult {
            total_development_cost,
            development_yield_percent,
        },
        band,
        sensitivity: compute_sensitivity_over(inputs.annual_rent, total_development_cost, offsets),
    }
}
