//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::WordcheckApiService;

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and service.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Word Validity Service
  ///
  /// - Production: `Arc::new(WordcheckApiServiceFull::new(&config)?)`
  /// - Test: a dummy implementation (see the `api::routes` tests)
  pub service: Arc<dyn WordcheckApiService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn WordcheckApiService>) -> Self {
    Self { config, service }
  }
}
