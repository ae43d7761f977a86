//! Calculation logic for the employer cost engine.
//!
//! This module contains the step functions of a cost calculation (contribution
//! base resolution, employer contributions, employee contributions and IRPF
//! withholding) and the engine that runs them in order.

mod contribution_base;
mod employee_contributions;
mod employer_contributions;
mod engine;
mod withholding;

pub use contribution_base::{
    CONTRIBUTION_BASE_REF, ContributionBaseResult, UNKNOWN_GROUP_WARNING,
    resolve_contribution_base,
};
pub use employee_contributions::{
    EMPLOYEE_RATES_REF, EmployeeContributionsResult, calculate_employee_contributions,
};
pub use employer_contributions::{
    EMPLOYER_RATES_REF, EmployerContributionsResult, calculate_employer_contributions,
};
pub use engine::{CostCalculation, compute_cost, compute_cost_traced};
pub use withholding::{IRPF_REF, WithholdingResult, calculate_irpf_withholding};
