//! Employer contribution calculation.
//!
//! Every employer contribution is the contribution base times a rate. Five
//! rates come from the rate table (the unemployment one selected by contract
//! type); the work-accident rate comes verbatim from the caller.

use rust_decimal::Decimal;

use crate::config::EmployerRates;
use crate::models::{AuditStep, ContractType, EmployerContributions};

/// Legal reference for the employer contribution rates.
pub const EMPLOYER_RATES_REF: &str = "Orden PJC/51/2024";

/// The result of calculating employer contributions.
#[derive(Debug, Clone)]
pub struct EmployerContributionsResult {
    /// The itemized contributions.
    pub contributions: EmployerContributions,
    /// The sum of all contributions.
    pub total: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the employer's social security contributions.
///
/// # Arguments
///
/// * `contribution_base` - The clamped contribution base
/// * `contract_type` - Selects the unemployment rate
/// * `work_accident_rate` - The AT/EP rate for the company's activity, used as given
/// * `rates` - The employer rates of the rate table
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```no_run
/// use employer_cost_engine::calculation::calculate_employer_contributions;
/// use employer_cost_engine::config::ConfigLoader;
/// use employer_cost_engine::models::ContractType;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = ConfigLoader::load("./config/es_2024").unwrap();
/// let result = calculate_employer_contributions(
///     Decimal::from(30000),
///     ContractType::Permanent,
///     Decimal::from_str("0.0150").unwrap(),
///     &loader.table().rates().employer,
///     2,
/// );
/// // 30000 x 0.3198
/// assert_eq!(result.total, Decimal::from(9594));
/// ```
pub fn calculate_employer_contributions(
    contribution_base: Decimal,
    contract_type: ContractType,
    work_accident_rate: Decimal,
    rates: &EmployerRates,
    step_number: u32,
) -> EmployerContributionsResult {
    let unemployment_rate = rates.unemployment.for_contract(contract_type);

    let contributions = EmployerContributions {
        common_contingencies: contribution_base * rates.common_contingencies,
        unemployment: contribution_base * unemployment_rate,
        professional_training: contribution_base * rates.professional_training,
        wage_guarantee_fund: contribution_base * rates.wage_guarantee_fund,
        work_accidents: contribution_base * work_accident_rate,
        intergenerational_equity: contribution_base * rates.intergenerational_equity,
    };
    let total = contributions.total();

    let combined_rate = rates.common_contingencies
        + unemployment_rate
        + rates.professional_training
        + rates.wage_guarantee_fund
        + work_accident_rate
        + rates.intergenerational_equity;

    let audit_step = AuditStep {
        step_number,
        rule_id: "employer_contributions".to_string(),
        rule_name: "Employer Contributions".to_string(),
        legal_ref: EMPLOYER_RATES_REF.to_string(),
        input: serde_json::json!({
            "contribution_base": contribution_base.normalize().to_string(),
            "contract_type": contract_type.as_str(),
            "rates": {
                "common_contingencies": rates.common_contingencies.normalize().to_string(),
                "unemployment": unemployment_rate.normalize().to_string(),
                "professional_training": rates.professional_training.normalize().to_string(),
                "wage_guarantee_fund": rates.wage_guarantee_fund.normalize().to_string(),
                "work_accidents": work_accident_rate.normalize().to_string(),
                "intergenerational_equity": rates.intergenerational_equity.normalize().to_string()
            }
        }),
        output: serde_json::json!({
            "common_contingencies": contributions.common_contingencies.normalize().to_string(),
            "unemployment": contributions.unemployment.normalize().to_string(),
            "professional_training": contributions.professional_training.normalize().to_string(),
            "wage_guarantee_fund": contributions.wage_guarantee_fund.normalize().to_string(),
            "work_accidents": contributions.work_accidents.normalize().to_string(),
            "intergenerational_equity": contributions.intergenerational_equity.normalize().to_string(),
            "total": total.normalize().to_string()
        }),
        reasoning: format!(
            "{} x {} = {}",
            contribution_base.normalize(),
            combined_rate.normalize(),
            total.normalize()
        ),
    };

    EmployerContributionsResult {
        contributions,
        total,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::fixtures::{dec, spain_2024_rates};

    fn calculate(base: &str, contract_type: ContractType) -> EmployerContributionsResult {
        calculate_employer_contributions(
            dec(base),
            contract_type,
            dec("0.0150"),
            &spain_2024_rates().employer,
            2,
        )
    }

    #[test]
    fn test_permanent_contract_components() {
        let result = calculate("30000", ContractType::Permanent);
        let c = &result.contributions;

        assert_eq!(c.common_contingencies, dec("7080"));
        assert_eq!(c.unemployment, dec("1650"));
        assert_eq!(c.professional_training, dec("180"));
        assert_eq!(c.wage_guarantee_fund, dec("60"));
        assert_eq!(c.work_accidents, dec("450"));
        assert_eq!(c.intergenerational_equity, dec("174"));
        assert_eq!(result.total, dec("9594"));
    }

    #[test]
    fn test_temporary_contract_changes_only_unemployment() {
        let permanent = calculate("30000", ContractType::Permanent);
        let temporary = calculate("30000", ContractType::Temporary);

        assert_eq!(temporary.contributions.unemployment, dec("2010"));
        assert_eq!(
            temporary.total - permanent.total,
            temporary.contributions.unemployment - permanent.contributions.unemployment
        );
        assert_eq!(
            temporary.contributions.common_contingencies,
            permanent.contributions.common_contingencies
        );
    }

    #[test]
    fn test_work_accident_rate_used_verbatim() {
        let result = calculate_employer_contributions(
            dec("30000"),
            ContractType::Permanent,
            dec("0.0670"),
            &spain_2024_rates().employer,
            2,
        );
        assert_eq!(result.contributions.work_accidents, dec("2010"));
    }

    #[test]
    fn test_zero_work_accident_rate() {
        let result = calculate_employer_contributions(
            dec("30000"),
            ContractType::Permanent,
            Decimal::ZERO,
            &spain_2024_rates().employer,
            2,
        );
        assert_eq!(result.contributions.work_accidents, Decimal::ZERO);
        assert_eq!(result.total, dec("9144"));
    }

    #[test]
    fn test_audit_reasoning_shows_combined_rate() {
        let result = calculate("30000", ContractType::Permanent);

        assert_eq!(result.audit_step.rule_id, "employer_contributions");
        assert_eq!(result.audit_step.step_number, 2);
        assert_eq!(result.audit_step.reasoning, "30000 x 0.3198 = 9594");
        assert_eq!(
            result.audit_step.input["rates"]["unemployment"].as_str().unwrap(),
            "0.055"
        );
    }
}
