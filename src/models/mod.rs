//! Core data models for the employer cost engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod cost_summary;
mod employee;
mod period;

pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, CalculationResult};
pub use cost_summary::{
    ContributionBreakdown, CostSummary, EmployeeDeductions, EmployerContributions,
};
pub use employee::{ContractType, EmployeeInput, MAX_GROSS_ANNUAL_SALARY};
pub use period::{PaymentSchedule, PeriodBreakdown, SalaryInput};
