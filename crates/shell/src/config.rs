use std::path::PathBuf;

use storefront_inventory::{CatalogConfig, CatalogError, InventoryStore};

/// Environment variable naming a JSON catalog file.
pub const CATALOG_ENV: &str = "STOREFRONT_CATALOG";

/// Startup configuration, read once from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellConfig {
    /// JSON catalog to load; the built-in catalog when `None`.
    pub catalog_path: Option<PathBuf>,
}

impl ShellConfig {
    pub fn from_env() -> Self {
        let catalog_path = std::env::var_os(CATALOG_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        if catalog_path.is_none() {
            tracing::info!("{CATALOG_ENV} not set; using built-in catalog");
        }
        Self { catalog_path }
    }

    pub fn load_inventory(&self) -> Result<InventoryStore, CatalogError> {
        let catalog = match &self.catalog_path {
            Some(path) => CatalogConfig::from_json_file(path)?,
            None => CatalogConfig::default_catalog(),
        };
        catalog.into_store()
    }
}
