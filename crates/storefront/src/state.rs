//! Application state shared across handlers.

use std::path::PathBuf;
use std::sync::Arc;

use vino_crackers_core::{Catalog, CatalogError};

use crate::config::StorefrontConfig;
use crate::services::delivery::ChannelNotifier;

/// Error building application state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("failed to read catalog file {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// catalog, the enquiry delivery channel and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    notifier: ChannelNotifier,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The catalog is read from `config.catalog_path` when set, otherwise the
    /// built-in product list is used.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog file cannot be read or is invalid.
    pub fn new(config: StorefrontConfig, notifier: ChannelNotifier) -> Result<Self, StateError> {
        let catalog = match &config.catalog_path {
            Some(path) => {
                let json =
                    std::fs::read_to_string(path).map_err(|source| StateError::CatalogRead {
                        path: path.clone(),
                        source,
                    })?;
                Catalog::from_json(&json)?
            }
            None => Catalog::fireworks(),
        };
        tracing::info!(products = catalog.len(), "Catalog loaded");

        Ok(Self::with_catalog(config, catalog, notifier))
    }

    /// Create application state around an already-loaded catalog.
    #[must_use]
    pub fn with_catalog(
        config: StorefrontConfig,
        catalog: Catalog,
        notifier: ChannelNotifier,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                notifier,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the enquiry delivery channel.
    #[must_use]
    pub fn notifier(&self) -> &ChannelNotifier {
        &self.inner.notifier
    }
}
