//! Cost summary models.
//!
//! This module contains the [`CostSummary`] produced by the cost engine and
//! the itemized employer/employee breakdown it carries. All amounts are
//! annual and unrounded.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Employer social security contributions, each applied to the contribution
/// base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerContributions {
    /// Common contingencies (contingencias comunes).
    pub common_contingencies: Decimal,
    /// Unemployment (desempleo), contract-type dependent.
    pub unemployment: Decimal,
    /// Professional training (formación profesional).
    pub professional_training: Decimal,
    /// Wage guarantee fund (FOGASA).
    pub wage_guarantee_fund: Decimal,
    /// Work accidents and occupational illness (AT/EP).
    pub work_accidents: Decimal,
    /// Intergenerational equity mechanism (MEI).
    pub intergenerational_equity: Decimal,
}

impl EmployerContributions {
    /// Returns the sum of every employer contribution.
    pub fn total(&self) -> Decimal {
        self.common_contingencies
            + self.unemployment
            + self.professional_training
            + self.wage_guarantee_fund
            + self.work_accidents
            + self.intergenerational_equity
    }
}

/// Amounts deducted from the employee's gross salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDeductions {
    /// Common contingencies (contingencias comunes).
    pub common_contingencies: Decimal,
    /// Unemployment (desempleo), contract-type dependent.
    pub unemployment: Decimal,
    /// Professional training (formación profesional).
    pub professional_training: Decimal,
    /// Intergenerational equity mechanism (MEI).
    pub intergenerational_equity: Decimal,
    /// Income-tax withholding, computed on gross salary.
    pub irpf: Decimal,
}

impl EmployeeDeductions {
    /// Common contingencies, unemployment and professional training: the
    /// grouped social security line of a Spanish payslip.
    pub fn general_contributions(&self) -> Decimal {
        self.common_contingencies + self.unemployment + self.professional_training
    }

    /// All employee social security contributions (excludes IRPF).
    pub fn social_security_total(&self) -> Decimal {
        self.general_contributions() + self.intergenerational_equity
    }

    /// Social security contributions plus IRPF.
    pub fn total_deductions(&self) -> Decimal {
        self.social_security_total() + self.irpf
    }
}

/// Itemized contributions for both sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionBreakdown {
    /// Contributions paid by the company.
    pub employer: EmployerContributions,
    /// Deductions from the employee's salary.
    pub employee: EmployeeDeductions,
}

/// The result of a cost calculation.
///
/// Created fresh on every call and never mutated afterwards; presentation
/// code projects and formats its fields.
///
/// # Example
///
/// ```
/// use employer_cost_engine::calculation::compute_cost;
/// use employer_cost_engine::config::ConfigLoader;
/// use employer_cost_engine::models::EmployeeInput;
///
/// let loader = ConfigLoader::load("./config/es_2024").unwrap();
/// let summary = compute_cost(&EmployeeInput::default(), loader.table()).unwrap();
/// assert_eq!(
///     summary.total_employer_cost,
///     summary.gross_annual_salary + summary.total_employer_contributions
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostSummary {
    /// Gross annual salary as supplied.
    pub gross_annual_salary: Decimal,
    /// Gross salary minus employee contributions and IRPF.
    pub net_annual_salary: Decimal,
    /// Gross salary plus employer contributions.
    pub total_employer_cost: Decimal,
    /// Sum of all employer contributions.
    pub total_employer_contributions: Decimal,
    /// Sum of employee social security contributions (excludes IRPF).
    pub total_employee_contributions: Decimal,
    /// The clamped base the contribution rates were applied to.
    pub contribution_base: Decimal,
    /// Itemized contributions.
    pub breakdown: ContributionBreakdown,
}
