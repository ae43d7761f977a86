//! Breakdown tables derived from a cost summary.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::CostSummary;

/// How a row should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowEmphasis {
    /// A plain line.
    Normal,
    /// One component of the total below it; rendered indented.
    Component,
    /// A subtotal or total.
    Total,
    /// The figure the table exists to show (net salary).
    Highlight,
}

/// One labelled amount in a breakdown table.
///
/// Deductions carry negative amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownRow {
    /// The row label, in Spanish.
    pub label: String,
    /// The unrounded amount.
    pub amount: Decimal,
    /// Presentation hint.
    pub emphasis: RowEmphasis,
}

impl BreakdownRow {
    fn new(label: &str, amount: Decimal, emphasis: RowEmphasis) -> Self {
        Self {
            label: label.to_string(),
            amount,
            emphasis,
        }
    }
}

/// Labels an MEI row with its rate, e.g. `MEI (0.58%)`.
///
/// The rate is recovered from the amount and the contribution base; a zero
/// base leaves the bare label.
fn mei_label(amount: Decimal, contribution_base: Decimal) -> String {
    if contribution_base.is_zero() {
        return "MEI".to_string();
    }
    let percentage = (amount / contribution_base * Decimal::ONE_HUNDRED).round_dp(2);
    format!("MEI ({}%)", percentage)
}

/// The employer-side and employee-side tables of a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostBreakdown {
    /// Gross salary, each employer contribution and the totals.
    pub employer: Vec<BreakdownRow>,
    /// Gross salary, each deduction and the net salary.
    pub employee: Vec<BreakdownRow>,
}

impl CostBreakdown {
    /// Builds both tables from a summary.
    ///
    /// The employee table groups common contingencies, unemployment and
    /// professional training into a single social security line, as a
    /// Spanish payslip does.
    pub fn from_summary(summary: &CostSummary) -> Self {
        let employer = &summary.breakdown.employer;
        let employee = &summary.breakdown.employee;
        let gross = summary.gross_annual_salary;
        let base = summary.contribution_base;

        let employer_rows = vec![
            BreakdownRow::new("Salario Bruto Anual", gross, RowEmphasis::Normal),
            BreakdownRow::new(
                "Contingencias Comunes",
                employer.common_contingencies,
                RowEmphasis::Component,
            ),
            BreakdownRow::new("Desempleo", employer.unemployment, RowEmphasis::Component),
            BreakdownRow::new(
                "Formación Profesional",
                employer.professional_training,
                RowEmphasis::Component,
            ),
            BreakdownRow::new("FOGASA", employer.wage_guarantee_fund, RowEmphasis::Component),
            BreakdownRow::new("AT y EP", employer.work_accidents, RowEmphasis::Component),
            BreakdownRow::new(
                &mei_label(employer.intergenerational_equity, base),
                employer.intergenerational_equity,
                RowEmphasis::Component,
            ),
            BreakdownRow::new(
                "Total Cargas Sociales",
                summary.total_employer_contributions,
                RowEmphasis::Total,
            ),
            BreakdownRow::new(
                "Coste Total Empresa",
                summary.total_employer_cost,
                RowEmphasis::Total,
            ),
        ];

        let employee_rows = vec![
            BreakdownRow::new("Salario Bruto Anual", gross, RowEmphasis::Normal),
            BreakdownRow::new(
                "S.S. (Conting. + Desempleo + FP)",
                -employee.general_contributions(),
                RowEmphasis::Component,
            ),
            BreakdownRow::new(
                &mei_label(employee.intergenerational_equity, base),
                -employee.intergenerational_equity,
                RowEmphasis::Component,
            ),
            BreakdownRow::new("IRPF (Estimado)", -employee.irpf, RowEmphasis::Component),
            BreakdownRow::new(
                "Total Deducciones",
                -employee.total_deductions(),
                RowEmphasis::Total,
            ),
            BreakdownRow::new(
                "Salario Neto Anual (Estimado)",
                summary.net_annual_salary,
                RowEmphasis::Highlight,
            ),
        ];

        Self {
            employer: employer_rows,
            employee: employee_rows,
        }
    }
}
