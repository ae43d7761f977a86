//! Employee input model and related types.
//!
//! This module defines the [`EmployeeInput`] record the cost engine consumes,
//! the [`ContractType`] enum, and the boundary validation applied to both.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Largest accepted gross annual salary (one trillion euros).
///
/// Every sum and product the engine derives from a salary in range stays
/// within `Decimal`.
pub const MAX_GROSS_ANNUAL_SALARY: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Represents the type of employment contract.
///
/// The contract type selects the unemployment contribution rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    /// Open-ended contract (contrato indefinido).
    Permanent,
    /// Fixed-term contract (contrato temporal).
    Temporary,
}

impl ContractType {
    /// Returns the snake_case name used in audit steps and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractType::Permanent => "permanent",
            ContractType::Temporary => "temporary",
        }
    }
}

/// Represents the employee and company data a cost calculation needs.
///
/// # Example
///
/// ```
/// use employer_cost_engine::models::{ContractType, EmployeeInput};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let input = EmployeeInput {
///     gross_annual_salary: Decimal::from(30000),
///     contract_type: ContractType::Permanent,
///     contribution_group: 1,
///     work_accident_rate: Decimal::from_str("0.0150").unwrap(),
///     irpf_percentage: Decimal::from(15),
/// };
/// assert!(input.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeInput {
    /// Gross annual salary, including extra payments.
    pub gross_annual_salary: Decimal,
    /// The type of employment contract.
    pub contract_type: ContractType,
    /// Contribution group (professional category) selecting the base band.
    ///
    /// Any integer is accepted; groups missing from the rate table follow its
    /// unknown-group policy.
    pub contribution_group: i64,
    /// Work-accident (AT/EP) rate, already resolved from the company's
    /// economic activity.
    pub work_accident_rate: Decimal,
    /// Income-tax withholding percentage, in `[0, 100]`.
    pub irpf_percentage: Decimal,
}

impl Default for EmployeeInput {
    /// 30 000 € permanent contract in group 1, office activity, 15% IRPF.
    fn default() -> Self {
        Self {
            gross_annual_salary: Decimal::from(30000),
            contract_type: ContractType::Permanent,
            contribution_group: 1,
            work_accident_rate: Decimal::new(150, 4),
            irpf_percentage: Decimal::from(15),
        }
    }
}

impl EmployeeInput {
    /// Checks every field against its domain.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEmployee` naming the first offending field:
    /// - `gross_annual_salary` must be positive and at most
    ///   [`MAX_GROSS_ANNUAL_SALARY`]
    /// - `irpf_percentage` must be between 0 and 100
    /// - `work_accident_rate` must be in `[0, 1)`
    pub fn validate(&self) -> EngineResult<()> {
        if self.gross_annual_salary <= Decimal::ZERO {
            return Err(EngineError::InvalidEmployee {
                field: "gross_annual_salary".to_string(),
                message: format!("must be positive, got {}", self.gross_annual_salary),
            });
        }

        if self.gross_annual_salary > MAX_GROSS_ANNUAL_SALARY {
            return Err(EngineError::InvalidEmployee {
                field: "gross_annual_salary".to_string(),
                message: format!(
                    "must not exceed {}, got {}",
                    MAX_GROSS_ANNUAL_SALARY, self.gross_annual_salary
                ),
            });
        }

        if self.irpf_percentage < Decimal::ZERO || self.irpf_percentage > Decimal::ONE_HUNDRED {
            return Err(EngineError::InvalidEmployee {
                field: "irpf_percentage".to_string(),
                message: format!("must be between 0 and 100, got {}", self.irpf_percentage),
            });
        }

        if self.work_accident_rate < Decimal::ZERO || self.work_accident_rate >= Decimal::ONE {
            return Err(EngineError::InvalidEmployee {
                field: "work_accident_rate".to_string(),
                message: format!("must be in [0, 1), got {}", self.work_accident_rate),
            });
        }

        Ok(())
    }
}
