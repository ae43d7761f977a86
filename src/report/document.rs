//! Printable plain-text cost report.

use rust_decimal::Decimal;

use crate::config::RateTableMetadata;
use crate::models::{CostSummary, PaymentSchedule, PeriodBreakdown};

use super::breakdown::{BreakdownRow, CostBreakdown, RowEmphasis};
use super::currency::format_eur_ascii;

/// Document title.
pub const DOCUMENT_TITLE: &str = "Resumen de Coste Salarial Anual";

/// Closing note printed under the per-payment section.
pub const IRPF_FOOTNOTE: &str =
    "La retencion de IRPF se calcula segun el porcentaje introducido. El calculo global es una estimacion.";

const LABEL_WIDTH: usize = 44;
const AMOUNT_WIDTH: usize = 20;
const RULE_WIDTH: usize = LABEL_WIDTH + AMOUNT_WIDTH;

/// Renders a summary as a printable text document.
///
/// Sections, in order: title and rate table, headline totals, employer
/// breakdown, employee breakdown, per-payment breakdown, IRPF note. Amounts
/// use [`format_eur_ascii`].
///
/// # Examples
///
/// ```no_run
/// use employer_cost_engine::calculation::compute_cost;
/// use employer_cost_engine::config::ConfigLoader;
/// use employer_cost_engine::models::{EmployeeInput, PaymentSchedule};
/// use employer_cost_engine::report::render_document;
///
/// let loader = ConfigLoader::load("./config/es_2024").unwrap();
/// let summary = compute_cost(&EmployeeInput::default(), loader.table()).unwrap();
/// let text = render_document(&summary, PaymentSchedule::Fourteen, loader.metadata());
/// assert!(text.contains("en 14 pagas"));
/// ```
pub fn render_document(
    summary: &CostSummary,
    schedule: PaymentSchedule,
    metadata: &RateTableMetadata,
) -> String {
    let breakdown = CostBreakdown::from_summary(summary);
    let period = PeriodBreakdown::new(summary, schedule);
    let mut out = String::new();

    out.push_str(DOCUMENT_TITLE);
    out.push('\n');
    out.push_str(&format!(
        "{} ({}), vigente desde {}\n\n",
        metadata.name,
        metadata.version,
        metadata.effective_date.format("%d/%m/%Y")
    ));

    push_line(&mut out, "Coste Total Anual para la Empresa:", summary.total_employer_cost);
    push_line(&mut out, "Salario Bruto Anual:", summary.gross_annual_salary);
    push_line(&mut out, "Salario Neto Anual (Estimado):", summary.net_annual_salary);
    push_rule(&mut out);

    push_section(&mut out, "Desglose del Coste Empresa (Anual)", &breakdown.employer);
    push_section(
        &mut out,
        "Desglose Salario del Trabajador (Anual)",
        &breakdown.employee,
    );
    push_rule(&mut out);

    let per_payment = [
        BreakdownRow {
            label: "Coste Total Empresa Mensual".to_string(),
            amount: period.total_employer_cost,
            emphasis: RowEmphasis::Normal,
        },
        BreakdownRow {
            label: "Salario Bruto Mensual".to_string(),
            amount: period.gross_salary,
            emphasis: RowEmphasis::Normal,
        },
        BreakdownRow {
            label: "Total Deducciones Mensuales".to_string(),
            amount: -period.total_deductions,
            emphasis: RowEmphasis::Normal,
        },
        BreakdownRow {
            label: "Salario Neto Mensual (Estimado)".to_string(),
            amount: period.net_salary,
            emphasis: RowEmphasis::Highlight,
        },
    ];
    push_section(
        &mut out,
        &format!(
            "Desglose Mensual Estimado (en {} pagas)",
            schedule.payments()
        ),
        &per_payment,
    );

    out.push_str(IRPF_FOOTNOTE);
    out.push('\n');
    out
}

fn push_section(out: &mut String, heading: &str, rows: &[BreakdownRow]) {
    out.push_str(heading);
    out.push('\n');
    out.push_str(&"=".repeat(heading.chars().count()));
    out.push('\n');
    for row in rows {
        let label = match row.emphasis {
            RowEmphasis::Component => format!("  - {}", row.label),
            RowEmphasis::Highlight => format!("* {}", row.label),
            RowEmphasis::Normal | RowEmphasis::Total => row.label.clone(),
        };
        push_line(out, &label, row.amount);
    }
    out.push('\n');
}

fn push_line(out: &mut String, label: &str, amount: Decimal) {
    out.push_str(&format!(
        "{:<label_w$}{:>amount_w$}\n",
        label,
        format_eur_ascii(amount),
        label_w = LABEL_WIDTH,
        amount_w = AMOUNT_WIDTH
    ));
}

fn push_rule(out: &mut String) {
    out.push('\n');
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push_str("\n\n");
}
