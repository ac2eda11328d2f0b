// ─── Catalog records ───
// JSON shapes returned by the addon catalog API.

use serde::{Deserialize, Serialize};

/// Stable catalog identifier of an addon (mod).
pub type AddonId = u32;
/// Catalog identifier of a single downloadable file.
pub type FileId = u32;

/// An addon as returned by search and by the addon info endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddonSummary {
    pub id: AddonId,
    pub name: String,
    #[serde(default)]
    pub website_url: String,
    #[serde(default)]
    pub authors: Vec<AddonAuthor>,
    #[serde(default)]
    pub category_section: Option<CategorySection>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AddonAuthor {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CategorySection {
    pub name: String,
}

impl AddonSummary {
    pub fn author_names(&self) -> Vec<String> {
        self.authors.iter().map(|a| a.name.clone()).collect()
    }

    /// True when the addon's category section matches `section` (e.g. "Mods").
    pub fn is_in_section(&self, section: &str) -> bool {
        self.category_section
            .as_ref()
            .map(|c| c.name == section)
            .unwrap_or(false)
    }
}

/// One entry of an addon's file list.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSummary {
    pub id: FileId,
    pub file_name: String,
    #[serde(default)]
    pub download_url: String,
    /// 1 = release, 2 = beta, 3 = alpha.
    pub release_type: u8,
    #[serde(default)]
    pub game_version: Vec<String>,
    #[serde(default)]
    pub dependencies: Vec<FileDependency>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDependency {
    pub addon_id: AddonId,
    /// 2 = optional, 3 = required. Other codes exist but are not resolved.
    #[serde(rename = "type")]
    pub kind: u8,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionSummary {
    pub version_string: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoaderVersionSummary {
    pub name: String,
    pub game_version: String,
    #[serde(default)]
    pub recommended: bool,
    #[serde(default)]
    pub latest: bool,
}
