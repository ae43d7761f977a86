//! Contribution base resolution.
//!
//! This module determines the amount social security rates apply to: the
//! gross salary clamped into the band of the employee's contribution group.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::{BandLookup, ContributionBand, RateTable, UnknownGroupPolicy};
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, AuditWarning};

/// Legal reference for the contribution base and its group bounds.
pub const CONTRIBUTION_BASE_REF: &str = "LGSS art. 147; Orden PJC/51/2024";

/// Warning code emitted when an unknown group falls back to the default band.
pub const UNKNOWN_GROUP_WARNING: &str = "UNKNOWN_CONTRIBUTION_GROUP";

/// Where the gross salary sits relative to the band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BasePosition {
    BelowMinimum,
    WithinBand,
    AboveMaximum,
}

impl BasePosition {
    fn of(gross: Decimal, band: &ContributionBand) -> Self {
        if gross < band.min_base {
            BasePosition::BelowMinimum
        } else if gross > band.max_base {
            BasePosition::AboveMaximum
        } else {
            BasePosition::WithinBand
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            BasePosition::BelowMinimum => "below_minimum",
            BasePosition::WithinBand => "within_band",
            BasePosition::AboveMaximum => "above_maximum",
        }
    }
}

/// The result of resolving a contribution base.
#[derive(Debug, Clone)]
pub struct ContributionBaseResult {
    /// The clamped contribution base.
    pub contribution_base: Decimal,
    /// The band the base was clamped to.
    pub band: ContributionBand,
    /// The group whose band was used.
    pub effective_group: u8,
    /// Set when the requested group was unknown and the default band was used.
    pub warning: Option<AuditWarning>,
    /// The audit step recording this resolution.
    pub audit_step: AuditStep,
}

/// Resolves the contribution base for a gross salary and group.
///
/// Looks up the group's band in the rate table and clamps the salary into
/// `[min_base, max_base]`. An unknown group follows the table's
/// [`UnknownGroupPolicy`]: `Fallback` substitutes the default band and
/// attaches a warning, `Reject` fails.
///
/// # Errors
///
/// Returns `InvalidInput` for an unknown group under `Reject`.
///
/// # Examples
///
/// ```no_run
/// use employer_cost_engine::calculation::resolve_contribution_base;
/// use employer_cost_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/es_2024").unwrap();
/// let result = resolve_contribution_base(Decimal::from(10000), 1, loader.table(), 1).unwrap();
/// assert_eq!(result.contribution_base, Decimal::new(2216880, 2));
/// ```
pub fn resolve_contribution_base(
    gross_annual_salary: Decimal,
    contribution_group: i64,
    rates: &RateTable,
    step_number: u32,
) -> EngineResult<ContributionBaseResult> {
    let lookup = rates.band_for(contribution_group);

    let warning = match lookup {
        BandLookup::Found { .. } => None,
        BandLookup::Fallback {
            requested,
            default_group,
            ..
        } => {
            if rates.unknown_group_policy() == UnknownGroupPolicy::Reject {
                return Err(EngineError::InvalidInput {
                    message: format!("unknown contribution group {}", requested),
                });
            }
            debug!(
                requested_group = requested,
                default_group, "Unknown contribution group, using default band"
            );
            Some(AuditWarning {
                code: UNKNOWN_GROUP_WARNING.to_string(),
                message: format!(
                    "Contribution group {} has no band; used group {} instead",
                    requested, default_group
                ),
                severity: "low".to_string(),
            })
        }
    };

    let band = lookup.band();
    let contribution_base = band.clamp(gross_annual_salary);

    let position = BasePosition::of(gross_annual_salary, &band);
    let group = lookup.effective_group();
    let reasoning = match position {
        BasePosition::BelowMinimum => format!(
            "Gross salary {} is below the group {} minimum; base raised to {}",
            gross_annual_salary.normalize(),
            group,
            contribution_base.normalize()
        ),
        BasePosition::AboveMaximum => format!(
            "Gross salary {} exceeds the group {} maximum; base capped at {}",
            gross_annual_salary.normalize(),
            group,
            contribution_base.normalize()
        ),
        BasePosition::WithinBand => format!(
            "Gross salary {} lies within the group {} band [{}, {}]",
            gross_annual_salary.normalize(),
            group,
            band.min_base.normalize(),
            band.max_base.normalize()
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "contribution_base".to_string(),
        rule_name: "Contribution Base".to_string(),
        legal_ref: CONTRIBUTION_BASE_REF.to_string(),
        input: serde_json::json!({
            "gross_annual_salary": gross_annual_salary.normalize().to_string(),
            "contribution_group": contribution_group
        }),
        output: serde_json::json!({
            "contribution_base": contribution_base.normalize().to_string(),
            "effective_group": group,
            "min_base": band.min_base.normalize().to_string(),
            "max_base": band.max_base.normalize().to_string(),
            "position": position.as_str(),
            "fallback_applied": lookup.is_fallback()
        }),
        reasoning,
    };

    Ok(ContributionBaseResult {
        contribution_base,
        band,
        effective_group: group,
        warning,
        audit_step,
    })
}
