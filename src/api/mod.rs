//! HTTP API module for the payroll engine.
//!
//! This module exposes the income tax, contribution and payroll
//! calculations as JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{IncomeTaxRequest, NisRequest, PayrollRequest, PeriodGrossRequest};
pub use response::{
    ApiError, BracketsResponse, ENGINE_VERSION, PayrollResponse, PeriodLimits, RatesResponse,
};
pub use state::AppState;
