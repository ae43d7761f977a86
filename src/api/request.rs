//! Request types for the employer cost API.
//!
//! This module defines the JSON body shared by the `/calculate` and `/report`
//! endpoints and its resolution into an [`EmployeeInput`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{ContractType, EmployeeInput, PaymentSchedule, SalaryInput};

/// Request body for the `/calculate` and `/report` endpoints.
///
/// The salary is given either annually or per payment, and the work-accident
/// rate either directly or through an economic activity code from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostRequest {
    /// Gross annual salary.
    #[serde(default)]
    pub gross_annual_salary: Option<Decimal>,
    /// Gross salary of each payment; multiplied by `number_of_payments`.
    #[serde(default)]
    pub monthly_salary: Option<Decimal>,
    /// The type of employment contract.
    pub contract_type: ContractType,
    /// Contribution group selecting the base band.
    pub contribution_group: i64,
    /// Work-accident rate, used verbatim.
    #[serde(default)]
    pub work_accident_rate: Option<Decimal>,
    /// Economic activity code whose rate should be used.
    #[serde(default)]
    pub economic_activity: Option<String>,
    /// Income-tax withholding percentage.
    pub irpf_percentage: Decimal,
    /// 12 or 14 payments per year.
    #[serde(default)]
    pub number_of_payments: PaymentSchedule,
}

/// A request resolved against the loaded catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRequest {
    /// The engine input.
    pub input: EmployeeInput,
    /// The payment schedule for per-payment figures.
    pub schedule: PaymentSchedule,
}

impl CostRequest {
    /// Resolves salary and work-accident rate into an [`EmployeeInput`].
    ///
    /// When neither a rate nor an activity is given, the first catalog
    /// activity's rate is used.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEmployee` when both or neither salary fields are set,
    /// or when both a rate and an activity are set. Returns
    /// `ActivityNotFound` for an unknown activity code, and `InvalidEmployee`
    /// when a per-payment salary times the payments is out of range.
    pub fn resolve(&self, config: &ConfigLoader) -> EngineResult<ResolvedRequest> {
        let schedule = self.number_of_payments;

        let salary = match (self.gross_annual_salary, self.monthly_salary) {
            (Some(annual), None) => SalaryInput::Annual(annual),
            (None, Some(per_payment)) => SalaryInput::PerPayment(per_payment),
            (Some(_), Some(_)) => {
                return Err(EngineError::InvalidEmployee {
                    field: "gross_annual_salary".to_string(),
                    message: "give either gross_annual_salary or monthly_salary, not both"
                        .to_string(),
                });
            }
            (None, None) => {
                return Err(EngineError::InvalidEmployee {
                    field: "gross_annual_salary".to_string(),
                    message: "one of gross_annual_salary or monthly_salary is required"
                        .to_string(),
                });
            }
        };

        let work_accident_rate = match (self.work_accident_rate, &self.economic_activity) {
            (Some(rate), None) => rate,
            (None, Some(code)) => config.get_activity(code)?.work_accident_rate,
            (Some(_), Some(_)) => {
                return Err(EngineError::InvalidEmployee {
                    field: "work_accident_rate".to_string(),
                    message: "give either work_accident_rate or economic_activity, not both"
                        .to_string(),
                });
            }
            (None, None) => config.default_work_accident_rate().ok_or_else(|| {
                EngineError::InvalidEmployee {
                    field: "work_accident_rate".to_string(),
                    message: "no rate given and the activity catalog is empty".to_string(),
                }
            })?,
        };

        Ok(ResolvedRequest {
            input: EmployeeInput {
                gross_annual_salary: salary.to_annual(schedule)?,
                contract_type: self.contract_type,
                contribution_group: self.contribution_group,
                work_accident_rate,
                irpf_percentage: self.irpf_percentage,
            },
            schedule,
        })
    }
}
