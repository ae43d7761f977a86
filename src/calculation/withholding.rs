//! Income-tax (IRPF) withholding.
//!
//! IRPF is withheld from the gross salary at a caller-supplied percentage.
//! Unlike social security it ignores the contribution base entirely.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// Legal reference for the withholding obligation.
pub const IRPF_REF: &str = "Ley 35/2006 art. 99";

/// The result of calculating the IRPF withholding.
#[derive(Debug, Clone)]
pub struct WithholdingResult {
    /// The amount withheld.
    pub irpf: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates `gross_annual_salary x irpf_percentage / 100`.
///
/// # Examples
///
/// ```
/// use employer_cost_engine::calculation::calculate_irpf_withholding;
/// use rust_decimal::Decimal;
///
/// let result = calculate_irpf_withholding(Decimal::from(30000), Decimal::from(15), 4);
/// assert_eq!(result.irpf, Decimal::from(4500));
/// ```
pub fn calculate_irpf_withholding(
    gross_annual_salary: Decimal,
    irpf_percentage: Decimal,
    step_number: u32,
) -> WithholdingResult {
    let irpf = gross_annual_salary * (irpf_percentage / Decimal::ONE_HUNDRED);

    let audit_step = AuditStep {
        step_number,
        rule_id: "irpf_withholding".to_string(),
        rule_name: "IRPF Withholding".to_string(),
        legal_ref: IRPF_REF.to_string(),
        input: serde_json::json!({
            "gross_annual_salary": gross_annual_salary.normalize().to_string(),
            "irpf_percentage": irpf_percentage.normalize().to_string()
        }),
        output: serde_json::json!({
            "irpf": irpf.normalize().to_string()
        }),
        reasoning: format!(
            "{} x {}% = {}",
            gross_annual_salary.normalize(),
            irpf_percentage.normalize(),
            irpf.normalize()
        ),
    };

    WithholdingResult { irpf, audit_step }
}
