//! HTTP API module for the employer cost engine.
//!
//! This module provides the REST endpoints: `POST /calculate`,
//! `POST /report` and `GET /catalog`.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CostRequest, ResolvedRequest};
pub use response::{ApiError, CalculationResponse, CatalogGroup, CatalogResponse};
pub use state::AppState;
