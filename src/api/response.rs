//! Response types for the employer cost API.
//!
//! This module defines the success bodies of each endpoint and the error
//! response structures the handlers return.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigLoader, EconomicActivity, RateTableMetadata, UnknownGroupPolicy};
use crate::error::EngineError;
use crate::models::CalculationResult;
use crate::report::{CostBreakdown, ProportionChart};

/// Body of a successful `/calculate` response.
///
/// The calculation result plus the presentation projections derived from it.
#[derive(Debug, Clone, Serialize)]
pub struct CalculationResponse {
    /// The calculation result.
    #[serde(flatten)]
    pub result: CalculationResult,
    /// Employer and employee breakdown tables.
    pub breakdown: CostBreakdown,
    /// Salary versus employer charges share of the total cost.
    pub chart: ProportionChart,
}

impl CalculationResponse {
    /// Derives the projections from a result.
    pub fn new(result: CalculationResult) -> Self {
        let breakdown = CostBreakdown::from_summary(&result.summary);
        let chart = ProportionChart::from_summary(&result.summary);
        Self {
            result,
            breakdown,
            chart,
        }
    }
}

/// A contribution group as listed by `/catalog`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogGroup {
    /// Group number.
    pub group: u8,
    /// Professional category.
    pub label: String,
    /// Minimum annual contribution base.
    pub min_base: Decimal,
    /// Maximum annual contribution base.
    pub max_base: Decimal,
}

/// Body of the `/catalog` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    /// The loaded rate table.
    pub rate_table: RateTableMetadata,
    /// Group used when a requested group is unknown.
    pub default_group: u8,
    /// What happens to unknown groups.
    pub unknown_group_policy: UnknownGroupPolicy,
    /// Contribution groups, ordered by number.
    pub groups: Vec<CatalogGroup>,
    /// Economic activities and their work-accident rates.
    pub activities: Vec<EconomicActivity>,
}

impl CatalogResponse {
    /// Lists the contents of a loaded configuration.
    pub fn from_config(config: &ConfigLoader) -> Self {
        let table = config.table();
        let groups = table
            .groups()
            .iter()
            .map(|(id, group)| CatalogGroup {
                group: *id,
                label: group.label.clone(),
                min_base: group.min_base,
                max_base: group.max_base,
            })
            .collect();

        Self {
            rate_table: table.metadata().clone(),
            default_group: table.default_group(),
            unknown_group_policy: table.unknown_group_policy(),
            groups,
            activities: config.activities().to_vec(),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an activity not found error response.
    pub fn activity_not_found(code: &str) -> Self {
        Self::with_details(
            "ACTIVITY_NOT_FOUND",
            format!("Economic activity not found: {}", code),
            "See GET /catalog for the supported activity codes",
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidConfig { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Invalid rate table", message),
            },
            EngineError::ActivityNotFound { code } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::activity_not_found(&code),
            },
            EngineError::InvalidEmployee { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_EMPLOYEE",
                    format!("Invalid employee field '{}': {}", field, message),
                    "The employee data contains invalid information",
                ),
            },
            EngineError::InvalidInput { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_INPUT",
                    format!("Invalid input: {}", message),
                    "The rate table rejects this input",
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::fixtures::spain_2024;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_activity_not_found_maps_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::ActivityNotFound {
            code: "mining".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "ACTIVITY_NOT_FOUND");
        assert!(api_error.error.message.contains("mining"));
    }

    #[test]
    fn test_invalid_input_maps_to_bad_request() {
        let api_error: ApiErrorResponse = EngineError::InvalidInput {
            message: "unknown contribution group 12".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_INPUT");
    }

    #[test]
    fn test_config_errors_are_server_errors() {
        let api_error: ApiErrorResponse = EngineError::InvalidConfig {
            message: "group 7 missing".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_catalog_lists_groups_in_order() {
        let config = ConfigLoader::from_parts(spain_2024(), vec![]).unwrap();
        let catalog = CatalogResponse::from_config(&config);

        assert_eq!(catalog.groups.len(), 11);
        assert_eq!(catalog.groups[0].group, 1);
        assert_eq!(catalog.default_group, 7);
        assert!(catalog.activities.is_empty());
    }
}
