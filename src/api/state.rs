//! Application state for the payroll API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, RateConfiguration};

/// Shared application state.
///
/// Holds the active rate table behind an `Arc`; handlers only ever read it.
#[derive(Clone)]
pub struct AppState {
    /// The active rate configuration.
    config: Arc<RateConfiguration>,
}

impl AppState {
    /// Creates a new application state from a loaded configuration.
    pub fn new(loader: ConfigLoader) -> Self {
        Self {
            config: loader.shared(),
        }
    }

    /// Returns a reference to the rate configuration.
    pub fn config(&self) -> &RateConfiguration {
        &self.config
    }
}
