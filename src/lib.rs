//! Employer cost and net salary engine for Spanish payroll
//!
//! This crate computes, from a gross annual salary and a few employment
//! parameters, what a Spanish employee costs the company (gross plus employer
//! social security) and what the employee takes home (gross minus employee
//! social security and IRPF withholding). Rates come from a YAML rate table
//! loaded once and passed to the engine explicitly.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
