//! Two-slice proportion of the total employer cost.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::models::CostSummary;

/// Label of the gross salary slice.
pub const GROSS_SALARY_LABEL: &str = "Salario Bruto";

/// Label of the employer contributions slice.
pub const EMPLOYER_CHARGES_LABEL: &str = "Cargas Sociales Empresa";

/// One slice of the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSlice {
    /// Slice label.
    pub label: String,
    /// The amount the slice represents.
    pub amount: Decimal,
    /// Share of the total, in percent. Unrounded.
    pub percentage: Decimal,
}

impl ChartSlice {
    /// Returns the label with the whole-number percentage, e.g. `Salario Bruto 76%`.
    pub fn caption(&self) -> String {
        let whole = self
            .percentage
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        format!("{} {}%", self.label, whole.normalize())
    }
}

/// How the total employer cost splits between salary and employer charges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProportionChart {
    /// The total employer cost the slices divide.
    pub total: Decimal,
    /// Gross salary first, employer contributions second.
    pub slices: Vec<ChartSlice>,
}

impl ProportionChart {
    /// Builds the chart from a summary.
    ///
    /// A zero total yields two 0% slices.
    pub fn from_summary(summary: &CostSummary) -> Self {
        let total = summary.total_employer_cost;
        let slice = |label: &str, amount: Decimal| ChartSlice {
            label: label.to_string(),
            amount,
            percentage: if total.is_zero() {
                Decimal::ZERO
            } else {
                amount / total * Decimal::ONE_HUNDRED
            },
        };

        Self {
            total,
            slices: vec![
                slice(GROSS_SALARY_LABEL, summary.gross_annual_salary),
                slice(EMPLOYER_CHARGES_LABEL, summary.total_employer_contributions),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::compute_cost;
    use crate::config::fixtures::{dec, spain_2024};
    use crate::models::{
        ContributionBreakdown, EmployeeDeductions, EmployeeInput, EmployerContributions,
    };

    fn zero_summary() -> CostSummary {
        CostSummary {
            gross_annual_salary: Decimal::ZERO,
            net_annual_salary: Decimal::ZERO,
            total_employer_cost: Decimal::ZERO,
            total_employer_contributions: Decimal::ZERO,
            total_employee_contributions: Decimal::ZERO,
            contribution_base: Decimal::ZERO,
            breakdown: ContributionBreakdown {
                employer: EmployerContributions {
                    common_contingencies: Decimal::ZERO,
                    unemployment: Decimal::ZERO,
                    professional_training: Decimal::ZERO,
                    wage_guarantee_fund: Decimal::ZERO,
                    work_accidents: Decimal::ZERO,
                    intergenerational_equity: Decimal::ZERO,
                },
                employee: EmployeeDeductions {
                    common_contingencies: Decimal::ZERO,
                    unemployment: Decimal::ZERO,
                    professional_training: Decimal::ZERO,
                    intergenerational_equity: Decimal::ZERO,
                    irpf: Decimal::ZERO,
                },
            },
        }
    }

    #[test]
    fn test_slices_split_total_cost() {
        let summary = compute_cost(&EmployeeInput::default(), &spain_2024()).unwrap();
        let chart = ProportionChart::from_summary(&summary);

        assert_eq!(chart.total, dec("39594"));
        assert_eq!(chart.slices[0].label, GROSS_SALARY_LABEL);
        assert_eq!(chart.slices[0].amount, dec("30000"));
        assert_eq!(chart.slices[1].amount, dec("9594"));

        let sum: Decimal = chart.slices.iter().map(|s| s.percentage).sum();
        assert_eq!(sum.round_dp(10), dec("100"));
    }

    #[test]
    fn test_captions_use_whole_percentages() {
        let summary = compute_cost(&EmployeeInput::default(), &spain_2024()).unwrap();
        let chart = ProportionChart::from_summary(&summary);

        assert_eq!(chart.slices[0].caption(), "Salario Bruto 76%");
        assert_eq!(chart.slices[1].caption(), "Cargas Sociales Empresa 24%");
    }

    #[test]
    fn test_zero_total_gives_zero_percentages() {
        let chart = ProportionChart::from_summary(&zero_summary());

        assert!(chart.slices.iter().all(|s| s.percentage == Decimal::ZERO));
        assert_eq!(chart.slices[1].caption(), "Cargas Sociales Empresa 0%");
    }
}
