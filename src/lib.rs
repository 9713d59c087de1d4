//! Statutory payroll engine for Jamaica.
//!
//! This crate computes PAYE income tax, National Insurance Scheme (NIS),
//! National Housing Trust (NHT), Education Tax and HEART/NTA contributions
//! for a gross pay figure, and reconciles them across weekly, fortnightly,
//! monthly and annual pay periods.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
