//! Presentation projections of a [`CostSummary`](crate::models::CostSummary).
//!
//! Nothing here computes new amounts. The projections format, group and
//! divide figures the engine has already produced, and are the only place
//! currency rounding happens.

mod breakdown;
mod chart;
mod currency;
mod document;

pub use breakdown::{BreakdownRow, CostBreakdown, RowEmphasis};
pub use chart::{ChartSlice, EMPLOYER_CHARGES_LABEL, GROSS_SALARY_LABEL, ProportionChart};
pub use currency::{format_eur, format_eur_ascii};
pub use document::{DOCUMENT_TITLE, IRPF_FOOTNOTE, render_document};
