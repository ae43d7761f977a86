//! The cost engine.
//!
//! Runs the calculation steps in order and assembles the [`CostSummary`].

use std::time::Instant;

use tracing::debug;

use crate::config::RateTable;
use crate::error::EngineResult;
use crate::models::{
    AuditTrace, ContributionBreakdown, CostSummary, EmployeeDeductions, EmployeeInput,
};

use super::{
    calculate_employee_contributions, calculate_employer_contributions,
    calculate_irpf_withholding, resolve_contribution_base,
};

/// A cost summary together with the audit trace that produced it.
#[derive(Debug, Clone)]
pub struct CostCalculation {
    /// The annual cost summary.
    pub summary: CostSummary,
    /// The steps and warnings recorded along the way.
    pub audit_trace: AuditTrace,
}

/// Computes the annual employer cost and net salary for one employee.
///
/// The input is validated first, so a rejected input never produces a
/// partial result. Amounts are exact and unrounded.
///
/// # Errors
///
/// Returns `InvalidEmployee` when validation fails, or `InvalidInput` for an
/// unknown contribution group when the rate table rejects unknown groups.
pub fn compute_cost(input: &EmployeeInput, rates: &RateTable) -> EngineResult<CostSummary> {
    compute_cost_traced(input, rates).map(|calculation| calculation.summary)
}

/// Like [`compute_cost`], but also returns the audit trace.
///
/// # Examples
///
/// ```no_run
/// use employer_cost_engine::calculation::compute_cost_traced;
/// use employer_cost_engine::config::ConfigLoader;
/// use employer_cost_engine::models::EmployeeInput;
///
/// let loader = ConfigLoader::load("./config/es_2024").unwrap();
/// let calculation = compute_cost_traced(&EmployeeInput::default(), loader.table()).unwrap();
/// assert_eq!(calculation.audit_trace.steps.len(), 4);
/// ```
pub fn compute_cost_traced(
    input: &EmployeeInput,
    rates: &RateTable,
) -> EngineResult<CostCalculation> {
    let start_time = Instant::now();
    input.validate()?;

    let mut steps = Vec::with_capacity(4);
    let mut warnings = Vec::new();
    let mut step_number: u32 = 1;

    let base = resolve_contribution_base(
        input.gross_annual_salary,
        input.contribution_group,
        rates,
        step_number,
    )?;
    let contribution_base = base.contribution_base;
    steps.push(base.audit_step);
    warnings.extend(base.warning);
    step_number += 1;

    let employer = calculate_employer_contributions(
        contribution_base,
        input.contract_type,
        input.work_accident_rate,
        &rates.rates().employer,
        step_number,
    );
    steps.push(employer.audit_step);
    step_number += 1;

    let employee = calculate_employee_contributions(
        contribution_base,
        input.contract_type,
        &rates.rates().employee,
        step_number,
    );
    steps.push(employee.audit_step);
    step_number += 1;

    let withholding =
        calculate_irpf_withholding(input.gross_annual_salary, input.irpf_percentage, step_number);
    steps.push(withholding.audit_step);

    let gross = input.gross_annual_salary;
    let summary = CostSummary {
        gross_annual_salary: gross,
        net_annual_salary: gross - (employee.total + withholding.irpf),
        total_employer_cost: gross + employer.total,
        total_employer_contributions: employer.total,
        total_employee_contributions: employee.total,
        contribution_base,
        breakdown: ContributionBreakdown {
            employer: employer.contributions,
            employee: EmployeeDeductions {
                common_contingencies: employee.common_contingencies,
                unemployment: employee.unemployment,
                professional_training: employee.professional_training,
                intergenerational_equity: employee.intergenerational_equity,
                irpf: withholding.irpf,
            },
        },
    };

    let duration_us = start_time.elapsed().as_micros() as u64;
    debug!(
        contribution_group = input.contribution_group,
        contribution_base = %contribution_base,
        total_employer_cost = %summary.total_employer_cost,
        duration_us,
        "Cost computed"
    );

    Ok(CostCalculation {
        summary,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    })
}
