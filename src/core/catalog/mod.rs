mod client;
mod types;

pub use client::{CurseCatalog, DEFAULT_API_BASE, MINECRAFT_GAME_ID};
pub use types::{
    AddonAuthor, AddonId, AddonSummary, CategorySection, FileDependency, FileId, FileSummary,
    LoaderVersionSummary, VersionSummary,
};

use async_trait::async_trait;

use crate::core::error::PackResult;

/// Read-only lookups against the remote addon catalog.
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn search_addons(&self, query: &str) -> PackResult<Vec<AddonSummary>>;
    async fn get_addon_info(&self, addon_id: AddonId) -> PackResult<AddonSummary>;
    async fn get_addon_files(&self, addon_id: AddonId) -> PackResult<Vec<FileSummary>>;
    async fn get_game_versions(&self) -> PackResult<Vec<VersionSummary>>;
    async fn get_mod_loader_versions(&self) -> PackResult<Vec<LoaderVersionSummary>>;
}
