//! Configuration types for the contribution rate table.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML files of a rate-table directory, plus the
//! validated [`RateTable`] the engine consumes.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{EngineError, EngineResult};
use crate::models::ContractType;

/// Metadata about the rate table snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateTableMetadata {
    /// Short code of the snapshot (e.g., "ES-RG-2024").
    pub code: String,
    /// The human-readable name of the contribution regime.
    pub name: String,
    /// The version of the snapshot.
    pub version: String,
    /// The date from which these rates apply.
    pub effective_date: NaiveDate,
    /// URL to the official rate publication.
    pub source_url: String,
}

/// What the engine does with a contribution group that has no band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownGroupPolicy {
    /// Substitute the table's default band and keep computing.
    #[default]
    Fallback,
    /// Refuse the input with [`EngineError::InvalidInput`].
    Reject,
}

/// Top-level settings file structure (`table.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct TableConfig {
    /// Snapshot metadata.
    #[serde(flatten)]
    pub metadata: RateTableMetadata,
    /// The group whose band is used when a lookup falls back.
    pub default_group: u8,
    /// Policy for unknown contribution groups.
    #[serde(default)]
    pub unknown_group_policy: UnknownGroupPolicy,
}

/// Annual contribution base bounds for a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionBand {
    /// Minimum annual contribution base.
    pub min_base: Decimal,
    /// Maximum annual contribution base.
    pub max_base: Decimal,
}

impl ContributionBand {
    /// Clamps a gross salary into `[min_base, max_base]`.
    ///
    /// # Example
    ///
    /// ```
    /// use employer_cost_engine::config::ContributionBand;
    /// use rust_decimal::Decimal;
    ///
    /// let band = ContributionBand {
    ///     min_base: Decimal::new(2216880, 2),
    ///     max_base: Decimal::new(5664600, 2),
    /// };
    /// assert_eq!(band.clamp(Decimal::from(10000)), Decimal::new(2216880, 2));
    /// assert_eq!(band.clamp(Decimal::from(30000)), Decimal::from(30000));
    /// assert_eq!(band.clamp(Decimal::from(100000)), Decimal::new(5664600, 2));
    /// ```
    pub fn clamp(&self, gross: Decimal) -> Decimal {
        gross.max(self.min_base).min(self.max_base)
    }
}

/// A contribution group (professional category) and its band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributionGroup {
    /// The human-readable label of the group.
    pub label: String,
    /// Minimum annual contribution base.
    pub min_base: Decimal,
    /// Maximum annual contribution base.
    pub max_base: Decimal,
}

impl ContributionGroup {
    /// Returns the group's band.
    pub fn band(&self) -> ContributionBand {
        ContributionBand {
            min_base: self.min_base,
            max_base: self.max_base,
        }
    }
}

/// Contribution groups file structure (`groups.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct GroupsConfig {
    /// Map of group id to group details.
    pub groups: BTreeMap<u8, ContributionGroup>,
}

/// Unemployment rates by contract type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnemploymentRates {
    /// Rate for permanent (indefinido) contracts.
    pub permanent: Decimal,
    /// Rate for temporary (temporal) contracts.
    pub temporary: Decimal,
}

impl UnemploymentRates {
    /// Returns the rate for the given contract type.
    pub fn for_contract(&self, contract_type: ContractType) -> Decimal {
        match contract_type {
            ContractType::Permanent => self.permanent,
            ContractType::Temporary => self.temporary,
        }
    }
}

/// Employer-side contribution rates.
///
/// The work-accident rate is not part of the table; it is activity specific
/// and supplied with each input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerRates {
    /// Common contingencies (contingencias comunes).
    pub common_contingencies: Decimal,
    /// Unemployment (desempleo) by contract type.
    pub unemployment: UnemploymentRates,
    /// Professional training (formación profesional).
    pub professional_training: Decimal,
    /// Wage guarantee fund (FOGASA).
    pub wage_guarantee_fund: Decimal,
    /// Intergenerational equity mechanism (MEI).
    pub intergenerational_equity: Decimal,
}

/// Employee-side contribution rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRates {
    /// Common contingencies (contingencias comunes).
    pub common_contingencies: Decimal,
    /// Unemployment (desempleo) by contract type.
    pub unemployment: UnemploymentRates,
    /// Professional training (formación profesional).
    pub professional_training: Decimal,
    /// Intergenerational equity mechanism (MEI).
    pub intergenerational_equity: Decimal,
}

/// Contribution rates file structure (`contributions.yaml`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionRates {
    /// Rates paid by the company.
    pub employer: EmployerRates,
    /// Rates withheld from the employee.
    pub employee: EmployeeRates,
}

/// An economic activity and the work-accident (AT/EP) rate it carries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomicActivity {
    /// Stable identifier used by API callers.
    pub code: String,
    /// The human-readable label of the activity.
    pub label: String,
    /// Example CNAE codes covered by this entry.
    #[serde(default)]
    pub cnae_examples: Vec<String>,
    /// The work-accident rate applied to the contribution base.
    pub work_accident_rate: Decimal,
}

/// Economic activities file structure (`activities.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct ActivitiesConfig {
    /// The activity catalog, in display order.
    pub activities: Vec<EconomicActivity>,
}

/// Outcome of looking up a contribution group's band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandLookup {
    /// The group has its own band.
    Found {
        /// The requested group.
        group: u8,
        /// The group's band.
        band: ContributionBand,
    },
    /// The group is unknown and the default band was substituted.
    Fallback {
        /// The requested (unknown) group, as received.
        requested: i64,
        /// The group whose band was used.
        default_group: u8,
        /// The default band.
        band: ContributionBand,
    },
}

impl BandLookup {
    /// Returns the band the contribution base is clamped to.
    pub fn band(&self) -> ContributionBand {
        match self {
            BandLookup::Found { band, .. } | BandLookup::Fallback { band, .. } => *band,
        }
    }

    /// Returns the group whose band is in effect.
    pub fn effective_group(&self) -> u8 {
        match self {
            BandLookup::Found { group, .. } => *group,
            BandLookup::Fallback { default_group, .. } => *default_group,
        }
    }

    /// Returns true if the default band was substituted.
    pub fn is_fallback(&self) -> bool {
        matches!(self, BandLookup::Fallback { .. })
    }
}

/// The complete, validated rate table.
///
/// Immutable once built; the engine only reads it.
#[derive(Debug, Clone)]
pub struct RateTable {
    metadata: RateTableMetadata,
    groups: BTreeMap<u8, ContributionGroup>,
    rates: ContributionRates,
    default_group: u8,
    unknown_group_policy: UnknownGroupPolicy,
}

impl RateTable {
    /// Builds a rate table, checking it for consistency.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if there are no groups, the default group has
    /// no band, a band's minimum exceeds its maximum or is not positive, or
    /// any rate lies outside `[0, 1)`.
    pub fn new(
        metadata: RateTableMetadata,
        groups: BTreeMap<u8, ContributionGroup>,
        rates: ContributionRates,
        default_group: u8,
        unknown_group_policy: UnknownGroupPolicy,
    ) -> EngineResult<Self> {
        if groups.is_empty() {
            return Err(invalid("no contribution groups defined"));
        }

        if !groups.contains_key(&default_group) {
            return Err(invalid(format!(
                "default group {} has no contribution band",
                default_group
            )));
        }

        for (id, group) in &groups {
            if group.min_base <= Decimal::ZERO {
                return Err(invalid(format!(
                    "group {} minimum base must be positive, got {}",
                    id, group.min_base
                )));
            }
            if group.min_base > group.max_base {
                return Err(invalid(format!(
                    "group {} minimum base {} exceeds maximum base {}",
                    id, group.min_base, group.max_base
                )));
            }
        }

        let employer = &rates.employer;
        let employee = &rates.employee;
        let named_rates = [
            ("employer.common_contingencies", employer.common_contingencies),
            ("employer.unemployment.permanent", employer.unemployment.permanent),
            ("employer.unemployment.temporary", employer.unemployment.temporary),
            ("employer.professional_training", employer.professional_training),
            ("employer.wage_guarantee_fund", employer.wage_guarantee_fund),
            ("employer.intergenerational_equity", employer.intergenerational_equity),
            ("employee.common_contingencies", employee.common_contingencies),
            ("employee.unemployment.permanent", employee.unemployment.permanent),
            ("employee.unemployment.temporary", employee.unemployment.temporary),
            ("employee.professional_training", employee.professional_training),
            ("employee.intergenerational_equity", employee.intergenerational_equity),
        ];
        for (name, rate) in named_rates {
            if rate < Decimal::ZERO || rate >= Decimal::ONE {
                return Err(invalid(format!(
                    "rate {} must be in [0, 1), got {}",
                    name, rate
                )));
            }
        }

        Ok(Self {
            metadata,
            groups,
            rates,
            default_group,
            unknown_group_policy,
        })
    }

    /// Returns the snapshot metadata.
    pub fn metadata(&self) -> &RateTableMetadata {
        &self.metadata
    }

    /// Returns all contribution groups, ordered by id.
    pub fn groups(&self) -> &BTreeMap<u8, ContributionGroup> {
        &self.groups
    }

    /// Returns the contribution rates.
    pub fn rates(&self) -> &ContributionRates {
        &self.rates
    }

    /// Returns the group used when a lookup falls back.
    pub fn default_group(&self) -> u8 {
        self.default_group
    }

    /// Returns the policy for unknown contribution groups.
    pub fn unknown_group_policy(&self) -> UnknownGroupPolicy {
        self.unknown_group_policy
    }

    /// Returns a copy of this table with a different unknown-group policy.
    pub fn with_unknown_group_policy(mut self, policy: UnknownGroupPolicy) -> Self {
        self.unknown_group_policy = policy;
        self
    }

    /// Looks up the band for a group, substituting the default band for
    /// unknown groups.
    ///
    /// Any integer is accepted; ids outside the table's key range are simply
    /// unknown. The policy is not consulted here; callers decide whether a
    /// [`BandLookup::Fallback`] is acceptable.
    pub fn band_for(&self, group: i64) -> BandLookup {
        let found = u8::try_from(group)
            .ok()
            .and_then(|id| self.groups.get(&id).map(|found| (id, found)));
        match found {
            Some((id, found)) => BandLookup::Found {
                group: id,
                band: found.band(),
            },
            None => {
                // The default group is checked in `new`, so it always resolves.
                let band = self
                    .groups
                    .get(&self.default_group)
                    .map(ContributionGroup::band)
                    .unwrap_or(ContributionBand {
                        min_base: Decimal::ZERO,
                        max_base: Decimal::ZERO,
                    });
                BandLookup::Fallback {
                    requested: group,
                    default_group: self.default_group,
                    band,
                }
            }
        }
    }
}

fn invalid(message: impl Into<String>) -> EngineError {
    EngineError::InvalidConfig {
        message: message.into(),
    }
}

/// Builders for the 2024 general-regime table used across unit tests.
#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use std::str::FromStr;

    pub(crate) fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    pub(crate) fn spain_2024_rates() -> ContributionRates {
        ContributionRates {
            employer: EmployerRates {
                common_contingencies: dec("0.2360"),
                unemployment: UnemploymentRates {
                    permanent: dec("0.0550"),
                    temporary: dec("0.0670"),
                },
                professional_training: dec("0.0060"),
                wage_guarantee_fund: dec("0.0020"),
                intergenerational_equity: dec("0.0058"),
            },
            employee: EmployeeRates {
                common_contingencies: dec("0.0470"),
                unemployment: UnemploymentRates {
                    permanent: dec("0.0155"),
                    temporary: dec("0.0160"),
                },
                professional_training: dec("0.0010"),
                intergenerational_equity: dec("0.0012"),
            },
        }
    }

    pub(crate) fn spain_2024_groups() -> BTreeMap<u8, ContributionGroup> {
        let mut groups = BTreeMap::new();
        groups.insert(
            1,
            ContributionGroup {
                label: "Grupo 1: Ingenieros y Licenciados".to_string(),
                min_base: dec("22168.80"),
                max_base: dec("56646.00"),
            },
        );
        groups.insert(
            2,
            ContributionGroup {
                label: "Grupo 2: Ing. Técnicos, Peritos y Ayudantes Titulados".to_string(),
                min_base: dec("18385.20"),
                max_base: dec("56646.00"),
            },
        );
        groups.insert(
            3,
            ContributionGroup {
                label: "Grupo 3: Jefes Administrativos y de Taller".to_string(),
                min_base: dec("15994.80"),
                max_base: dec("56646.00"),
            },
        );
        for (id, label) in [
            (4, "Grupo 4: Ayudantes no Titulados"),
            (5, "Grupo 5: Oficiales Administrativos"),
            (6, "Grupo 6: Subalternos"),
            (7, "Grupo 7: Auxiliares Administrativos"),
            (8, "Grupo 8: Oficiales de Primera y Segunda"),
            (9, "Grupo 9: Oficiales de Tercera y Especialistas"),
            (10, "Grupo 10: Peones"),
            (11, "Grupo 11: Trabajadores menores de 18 años"),
        ] {
            groups.insert(
                id,
                ContributionGroup {
                    label: label.to_string(),
                    min_base: dec("15876.00"),
                    max_base: dec("56646.00"),
                },
            );
        }
        groups
    }

    pub(crate) fn spain_2024_metadata() -> RateTableMetadata {
        RateTableMetadata {
            code: "ES-RG-2024".to_string(),
            name: "Régimen General de la Seguridad Social".to_string(),
            version: "2024".to_string(),
            effective_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            source_url: "https://www.seg-social.es".to_string(),
        }
    }

    pub(crate) fn spain_2024() -> RateTable {
        RateTable::new(
            spain_2024_metadata(),
            spain_2024_groups(),
            spain_2024_rates(),
            7,
            UnknownGroupPolicy::Fallback,
        )
        .unwrap()
    }
}
