//! Rate configuration for the payroll engine.
//!
//! A [`RateConfiguration`] holds one tax year's statutory rates. It is
//! either the built-in table ([`RateConfiguration::jamaica_2024`]) or a
//! YAML file read through [`ConfigLoader`].
//!
//! # Example
//!
//! ```no_run
//! use jamaica_payroll::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/jamaica_2024.yaml").unwrap();
//! println!("Tax year: {}", loader.config().tax_year);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BracketCeiling, ContributionRates, IncomeTaxRates, LevyRate, NisRates, RateConfiguration,
    TaxBracket,
};
