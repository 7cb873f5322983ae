use tracing::{info, warn};

use ganancias_core::models::DeductionCatalog;

use crate::client::ApiClient;
use crate::error::ApiError;

/// Holds the deduction catalog across reloads.
///
/// A successful load replaces the catalog wholesale; a failed load keeps
/// the previous one (possibly empty) so the UI never crashes when caps are
/// unavailable. Cap-dependent features simply degrade: with an empty
/// catalog no warning ever fires.
#[derive(Debug, Clone, Default)]
pub struct CatalogCache {
    catalog: DeductionCatalog,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &DeductionCatalog {
        &self.catalog
    }

    /// Fetches the catalog and applies the result. Errors are logged, not
    /// propagated: catalog availability must never block the form.
    pub async fn load(
        &mut self,
        client: &ApiClient,
    ) {
        let fetched = client.fetch_catalog().await;
        self.apply(fetched);
    }

    /// The replace-or-keep rule, separated from the network call so it can
    /// be exercised directly.
    pub fn apply(
        &mut self,
        fetched: Result<DeductionCatalog, ApiError>,
    ) {
        match fetched {
            Ok(catalog) => {
                info!(entries = catalog.optional.len(), "deduction catalog loaded");
                self.catalog = catalog;
            }
            Err(error) => {
                warn!(%error, "deduction catalog load failed; keeping previous catalog");
            }
        }
    }
}
