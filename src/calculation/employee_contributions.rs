//! Employee contribution calculation.
//!
//! The employee pays common contingencies, unemployment, professional
//! training and the intergenerational equity mechanism on the same
//! contribution base as the employer.

use rust_decimal::Decimal;

use crate::config::EmployeeRates;
use crate::models::{AuditStep, ContractType};

/// Legal reference for the employee contribution rates.
pub const EMPLOYEE_RATES_REF: &str = "Orden PJC/51/2024";

/// The result of calculating employee contributions.
#[derive(Debug, Clone)]
pub struct EmployeeContributionsResult {
    /// Common contingencies.
    pub common_contingencies: Decimal,
    /// Unemployment, by contract type.
    pub unemployment: Decimal,
    /// Professional training.
    pub professional_training: Decimal,
    /// Intergenerational equity mechanism.
    pub intergenerational_equity: Decimal,
    /// The sum of all four contributions.
    pub total: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the employee's social security contributions.
///
/// IRPF is not part of this step; see
/// [`calculate_irpf_withholding`](super::calculate_irpf_withholding).
pub fn calculate_employee_contributions(
    contribution_base: Decimal,
    contract_type: ContractType,
    rates: &EmployeeRates,
    step_number: u32,
) -> EmployeeContributionsResult {
    let unemployment_rate = rates.unemployment.for_contract(contract_type);

    let common_contingencies = contribution_base * rates.common_contingencies;
    let unemployment = contribution_base * unemployment_rate;
    let professional_training = contribution_base * rates.professional_training;
    let intergenerational_equity = contribution_base * rates.intergenerational_equity;
    let total = common_contingencies + unemployment + professional_training + intergenerational_equity;

    let combined_rate = rates.common_contingencies
        + unemployment_rate
        + rates.professional_training
        + rates.intergenerational_equity;

    let audit_step = AuditStep {
        step_number,
        rule_id: "employee_contributions".to_string(),
        rule_name: "Employee Contributions".to_string(),
        legal_ref: EMPLOYEE_RATES_REF.to_string(),
        input: serde_json::json!({
            "contribution_base": contribution_base.normalize().to_string(),
            "contract_type": contract_type.as_str(),
            "combined_rate": combined_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "common_contingencies": common_contingencies.normalize().to_string(),
            "unemployment": unemployment.normalize().to_string(),
            "professional_training": professional_training.normalize().to_string(),
            "intergenerational_equity": intergenerational_equity.normalize().to_string(),
            "total": total.normalize().to_string()
        }),
        reasoning: format!(
            "{} x {} = {}",
            contribution_base.normalize(),
            combined_rate.normalize(),
            total.normalize()
        ),
    };

    EmployeeContributionsResult {
        common_contingencies,
        unemployment,
        professional_training,
        intergenerational_equity,
        total,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::fixtures::{dec, spain_2024_rates};

    #[test]
    fn test_permanent_contract_contributions() {
        let result = calculate_employee_contributions(
            dec("30000"),
            ContractType::Permanent,
            &spain_2024_rates().employee,
            3,
        );

        assert_eq!(result.common_contingencies, dec("1410"));
        assert_eq!(result.unemployment, dec("465"));
        assert_eq!(result.professional_training, dec("30"));
        assert_eq!(result.intergenerational_equity, dec("36"));
        assert_eq!(result.total, dec("1941"));
        assert_eq!(result.audit_step.reasoning, "30000 x 0.0647 = 1941");
    }

    #[test]
    fn test_temporary_contract_uses_higher_unemployment_rate() {
        let result = calculate_employee_contributions(
            dec("30000"),
            ContractType::Temporary,
            &spain_2024_rates().employee,
            3,
        );

        assert_eq!(result.unemployment, dec("480"));
        assert_eq!(result.total, dec("1956"));
    }

    #[test]
    fn test_clamped_base_drives_contributions() {
        let result = calculate_employee_contributions(
            dec("56646.00"),
            ContractType::Permanent,
            &spain_2024_rates().employee,
            3,
        );

        // 56646 x 0.0647
        assert_eq!(result.total, dec("3664.9962"));
    }
}
