use serde::Serialize;
use thiserror::Error;

use crate::core::catalog::{AddonId, AddonSummary, FileId, FileSummary};
use crate::core::error::{PackError, PackResult};

/// Maturity classification of a file. Catalog codes outside 1..=3 map to
/// `Unknown` instead of failing.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseType {
    Release,
    Beta,
    Alpha,
    Unknown,
}

impl ReleaseType {
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => ReleaseType::Release,
            2 => ReleaseType::Beta,
            3 => ReleaseType::Alpha,
            _ => ReleaseType::Unknown,
        }
    }

    /// Suffix shown next to a file name.
    pub fn label(self) -> &'static str {
        match self {
            ReleaseType::Release => "Release",
            ReleaseType::Beta => "Beta",
            ReleaseType::Alpha => "Alpha",
            ReleaseType::Unknown => "Unknown Type",
        }
    }
}

impl std::fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// How a file depends on another mod.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    Required,
    Optional,
}

impl DependencyKind {
    /// Catalog code 3 is required, 2 is optional. Anything else (embedded,
    /// tool, incompatible, ...) is not tracked.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            3 => Some(DependencyKind::Required),
            2 => Some(DependencyKind::Optional),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Dependency {
    pub addon_id: AddonId,
    pub kind: DependencyKind,
}

/// Why a dependency edge was dropped.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DependencyError {
    #[error("dependency cycle through mod {0}")]
    Cycle(AddonId),

    #[error("lookup failed for mod {addon_id}: {reason}")]
    LookupFailed { addon_id: AddonId, reason: String },
}

/// Data-quality problem with a file's game-version tags.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VersionTagError {
    #[error("no Minecraft version tag")]
    Missing,

    #[error("ambiguous Minecraft version tags: {0:?}")]
    Ambiguous(Vec<String>),
}

/// Picks the single Minecraft version out of a file's game-version tags,
/// ignoring the loader's own tag.
pub fn extract_minecraft_version(
    tags: &[String],
    loader_tag: &str,
) -> Result<String, VersionTagError> {
    let mut candidates = tags.iter().filter(|t| t.as_str() != loader_tag);

    match (candidates.next(), candidates.next()) {
        (None, _) => Err(VersionTagError::Missing),
        (Some(only), None) => Ok(only.clone()),
        (Some(_), Some(_)) => Err(VersionTagError::Ambiguous(
            tags.iter()
                .filter(|t| t.as_str() != loader_tag)
                .cloned()
                .collect(),
        )),
    }
}

/// A specific downloadable build of a mod.
#[derive(Debug, Clone)]
pub struct ModFile {
    /// Back-reference to the owning mod.
    pub addon_id: AddonId,
    pub id: FileId,
    pub file_name: String,
    pub download_url: String,
    pub release_type: ReleaseType,
    pub minecraft_version: Result<String, VersionTagError>,
    pub dependencies: Vec<Dependency>,
    /// Dependency edges that could not be resolved.
    pub dependency_issues: Vec<DependencyError>,
}

impl ModFile {
    /// Builds the file record without dependency edges; the resolver fills
    /// those in.
    pub fn from_summary(addon_id: AddonId, summary: &FileSummary, loader_tag: &str) -> Self {
        Self {
            addon_id,
            id: summary.id,
            file_name: summary.file_name.clone(),
            download_url: summary.download_url.clone(),
            release_type: ReleaseType::from_code(summary.release_type),
            minecraft_version: extract_minecraft_version(&summary.game_version, loader_tag),
            dependencies: Vec::new(),
            dependency_issues: Vec::new(),
        }
    }

    pub fn is_for_minecraft(&self, version: &str) -> bool {
        matches!(&self.minecraft_version, Ok(v) if v == version)
    }

    pub fn depends_on(&self, addon_id: AddonId) -> bool {
        self.dependencies.iter().any(|d| d.addon_id == addon_id)
    }
}

/// A mod in the working set, with the files available for it.
#[derive(Debug, Clone)]
pub struct Mod {
    pub id: AddonId,
    pub name: String,
    pub website_url: String,
    pub authors: Vec<String>,
    pub files: Vec<ModFile>,
    selected_file: Option<FileId>,
}

impl Mod {
    pub fn from_summary(summary: &AddonSummary) -> Self {
        Self {
            id: summary.id,
            name: summary.name.clone(),
            website_url: summary.website_url.clone(),
            authors: summary.author_names(),
            files: Vec::new(),
            selected_file: None,
        }
    }

    pub fn file(&self, file_id: FileId) -> Option<&ModFile> {
        self.files.iter().find(|f| f.id == file_id)
    }

    pub fn selected_file(&self) -> Option<&ModFile> {
        self.selected_file.and_then(|id| self.file(id))
    }

    /// Select one of this mod's own files.
    pub fn select_file(&mut self, file_id: FileId) -> PackResult<()> {
        if self.file(file_id).is_none() {
            return Err(PackError::FileNotFound {
                addon_id: self.id,
                file_id,
            });
        }
        self.selected_file = Some(file_id);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected_file = None;
    }
}

impl std::fmt::Display for Mod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (#{}, {} files)", self.name, self.id, self.files.len())
    }
}
