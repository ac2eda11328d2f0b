use std::path::PathBuf;
use std::sync::Arc;

use crate::core::catalog::{Catalog, CurseCatalog};
use crate::core::error::PackResult;
use crate::core::export::{default_output_root, PackMetadata};
use crate::core::http::build_http_client;
use crate::core::pack::ModRegistry;

use super::settings::Settings;

/// Everything one modpack-building session works on. Lives only in memory.
pub struct AppState {
    pub settings: Settings,
    pub catalog: Arc<dyn Catalog>,
    pub registry: ModRegistry,
    pub pack: PackMetadata,
    pub minecraft_version: Option<String>,
    pub loader_version: Option<String>,
}

impl AppState {
    pub fn new(settings: Settings) -> PackResult<Self> {
        let http_client = build_http_client(&settings.user_agent)?;
        let catalog = CurseCatalog::new(http_client, settings.api_base.clone(), settings.game_id);
        Ok(Self::with_catalog(settings, Arc::new(catalog)))
    }

    pub fn with_catalog(settings: Settings, catalog: Arc<dyn Catalog>) -> Self {
        Self {
            settings,
            catalog,
            registry: ModRegistry::new(),
            pack: PackMetadata::default(),
            minecraft_version: None,
            loader_version: None,
        }
    }

    /// Directory exported packs are written under.
    pub fn output_root(&self) -> PathBuf {
        self.settings
            .output_dir
            .clone()
            .unwrap_or_else(default_output_root)
    }
}
