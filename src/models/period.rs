//! Payment schedule and per-payment figures.
//!
//! Spanish salaries are paid in 12 or 14 instalments (the latter with two
//! extra payments). The schedule is informational: it converts between annual
//! and per-payment salary for display and never changes annual totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CostSummary;
use crate::error::{EngineError, EngineResult};

/// Number of salary payments per year.
///
/// Serialized as the bare number (`12` or `14`).
///
/// # Example
///
/// ```
/// use employer_cost_engine::models::PaymentSchedule;
/// use rust_decimal::Decimal;
///
/// let schedule = PaymentSchedule::Fourteen;
/// assert_eq!(schedule.payments(), 14);
/// assert_eq!(schedule.per_payment(Decimal::from(28000)), Decimal::from(2000));
/// assert_eq!(schedule.annual(Decimal::from(2000)), Some(Decimal::from(28000)));
/// assert_eq!(schedule.annual(Decimal::MAX), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PaymentSchedule {
    /// Twelve monthly payments.
    #[default]
    Twelve,
    /// Twelve monthly payments plus two extra payments.
    Fourteen,
}

impl PaymentSchedule {
    /// Returns the number of payments per year.
    pub fn payments(&self) -> u8 {
        match self {
            PaymentSchedule::Twelve => 12,
            PaymentSchedule::Fourteen => 14,
        }
    }

    /// Returns the divisor as a decimal.
    pub fn divisor(&self) -> Decimal {
        Decimal::from(self.payments())
    }

    /// Converts an annual amount to a per-payment amount.
    pub fn per_payment(&self, annual: Decimal) -> Decimal {
        annual / self.divisor()
    }

    /// Converts a per-payment amount to an annual amount, or `None` when the
    /// product does not fit in a decimal.
    pub fn annual(&self, per_payment: Decimal) -> Option<Decimal> {
        per_payment.checked_mul(self.divisor())
    }
}

impl TryFrom<u8> for PaymentSchedule {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            12 => Ok(PaymentSchedule::Twelve),
            14 => Ok(PaymentSchedule::Fourteen),
            other => Err(format!("number of payments must be 12 or 14, got {}", other)),
        }
    }
}

impl From<PaymentSchedule> for u8 {
    fn from(schedule: PaymentSchedule) -> Self {
        schedule.payments()
    }
}

/// A salary amount as entered at the input boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalaryInput {
    /// Gross annual salary.
    Annual(Decimal),
    /// Gross salary of each payment.
    PerPayment(Decimal),
}

impl SalaryInput {
    /// Resolves the gross annual salary under the given schedule.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEmployee` on `monthly_salary` when the per-payment
    /// amount times the number of payments overflows.
    pub fn to_annual(self, schedule: PaymentSchedule) -> EngineResult<Decimal> {
        match self {
            SalaryInput::Annual(amount) => Ok(amount),
            SalaryInput::PerPayment(amount) => {
                schedule
                    .annual(amount)
                    .ok_or_else(|| EngineError::InvalidEmployee {
                        field: "monthly_salary".to_string(),
                        message: format!(
                            "{} x {} payments is out of range",
                            amount,
                            schedule.payments()
                        ),
                    })
            }
        }
    }
}

/// Per-payment view of a cost summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodBreakdown {
    /// The schedule used to divide annual figures.
    pub number_of_payments: PaymentSchedule,
    /// Total employer cost per payment.
    pub total_employer_cost: Decimal,
    /// Gross salary per payment.
    pub gross_salary: Decimal,
    /// Employee social security contributions per payment.
    pub employee_contributions: Decimal,
    /// IRPF withholding per payment.
    pub irpf: Decimal,
    /// All employee deductions per payment.
    pub total_deductions: Decimal,
    /// Net salary per payment.
    pub net_salary: Decimal,
}

impl PeriodBreakdown {
    /// Divides the annual figures of a summary by the schedule's payments.
    pub fn new(summary: &CostSummary, schedule: PaymentSchedule) -> Self {
        let employee = &summary.breakdown.employee;
        Self {
            number_of_payments: schedule,
            total_employer_cost: schedule.per_payment(summary.total_employer_cost),
            gross_salary: schedule.per_payment(summary.gross_annual_salary),
            employee_contributions: schedule.per_payment(summary.total_employee_contributions),
            irpf: schedule.per_payment(employee.irpf),
            total_deductions: schedule.per_payment(employee.total_deductions()),
            net_salary: schedule.per_payment(summary.net_annual_salary),
        }
    }
}
