// ─── Commands ───
// Thin adapter between a front-end and the core: every user action is one
// function over `AppState`, returning plain serializable views.

use serde::Serialize;
use tracing::info;

use crate::core::catalog::{AddonId, AddonSummary, FileId};
use crate::core::error::{PackError, PackResult};
use crate::core::export::{pack_folder_name, ExportBundle, PackMetadata};
use crate::core::pack::{DependencyResolver, Mod};
use crate::core::selection::{file_choices, loader_choices, FileChoices, LoaderChoice};
use crate::core::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct ModInfo {
    pub id: AddonId,
    pub name: String,
    pub website_url: String,
    pub authors: Vec<String>,
    pub file_count: usize,
    pub choices: FileChoices,
    pub selected_file: Option<FileId>,
    /// Data-quality and dependency problems found while resolving the mod.
    pub issues: Vec<String>,
}

impl ModInfo {
    fn from_mod(m: &Mod, minecraft_version: Option<&str>) -> Self {
        let mut issues = Vec::new();
        for file in &m.files {
            if let Err(e) = &file.minecraft_version {
                issues.push(format!("{}: {}", file.file_name, e));
            }
            for issue in &file.dependency_issues {
                issues.push(format!("{}: {}", file.file_name, issue));
            }
        }

        Self {
            id: m.id,
            name: m.name.clone(),
            website_url: m.website_url.clone(),
            authors: m.authors.clone(),
            file_count: m.files.len(),
            choices: file_choices(m, minecraft_version),
            selected_file: m.selected_file().map(|f| f.id),
            issues,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MinecraftSelection {
    pub minecraft_version: String,
    pub loaders: Vec<LoaderChoice>,
    pub selected_loader: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportSummary {
    pub pack_dir: String,
    pub archive: Option<String>,
    pub mod_count: usize,
}

/// Search the catalog, keeping only results from the configured category.
pub async fn search_mods(state: &AppState, query: &str) -> PackResult<Vec<AddonSummary>> {
    let results = state.catalog.search_addons(query).await?;
    Ok(results
        .into_iter()
        .filter(|a| a.is_in_section(&state.settings.mods_category))
        .collect())
}

/// Add a search result and everything it requires.
pub async fn add_mod(state: &mut AppState, summary: AddonSummary) -> PackResult<ModInfo> {
    info!("User wants to add mod {}", summary.name);
    let mut resolver =
        DependencyResolver::new(state.catalog.as_ref(), state.settings.loader_tag.clone());
    let id = resolver.add_mod(&mut state.registry, summary).await?;
    mod_info(state, id)
}

pub async fn add_mod_by_id(state: &mut AppState, addon_id: AddonId) -> PackResult<ModInfo> {
    let mut resolver =
        DependencyResolver::new(state.catalog.as_ref(), state.settings.loader_tag.clone());
    let id = resolver.add_mod_by_id(&mut state.registry, addon_id).await?;
    mod_info(state, id)
}

/// Remove a mod from the pack. Edges other mods hold to it are left as-is.
pub fn remove_mod(state: &mut AppState, addon_id: AddonId) -> PackResult<()> {
    state
        .registry
        .remove(addon_id)
        .map(|_| ())
        .ok_or(PackError::ModNotFound(addon_id))
}

pub async fn get_minecraft_versions(state: &AppState) -> PackResult<Vec<String>> {
    let versions = state.catalog.get_game_versions().await?;
    Ok(versions.into_iter().map(|v| v.version_string).collect())
}

/// Choose the pack's Minecraft version.
///
/// Changing the version clears every mod's selected file, since files are
/// per Minecraft version. The loader selection is kept when still offered,
/// otherwise the first (newest) loader is picked.
pub async fn select_minecraft_version(
    state: &mut AppState,
    version: String,
) -> PackResult<MinecraftSelection> {
    let loaders = state.catalog.get_mod_loader_versions().await?;
    let choices = loader_choices(&loaders, &version);

    if state.minecraft_version.as_deref() != Some(version.as_str()) {
        for m in state.registry.items_mut() {
            m.clear_selection();
        }
        info!("Minecraft version set to {}", version);
        state.minecraft_version = Some(version.clone());
    }

    let keep_current = state
        .loader_version
        .as_deref()
        .map(|current| choices.iter().any(|c| c.version == current))
        .unwrap_or(false);
    if !keep_current {
        state.loader_version = choices.first().map(|c| c.version.clone());
    }

    Ok(MinecraftSelection {
        minecraft_version: version,
        loaders: choices,
        selected_loader: state.loader_version.clone(),
    })
}

pub fn select_loader_version(state: &mut AppState, version: String) {
    info!("Mod loader set to {}", version);
    state.loader_version = Some(version);
}

pub fn set_pack_metadata(state: &mut AppState, meta: PackMetadata) {
    state.pack = meta;
}

pub fn list_pack_mods(state: &AppState) -> Vec<ModInfo> {
    let version = state.minecraft_version.as_deref();
    state
        .registry
        .items()
        .map(|(_, m)| ModInfo::from_mod(m, version))
        .collect()
}

/// Choose a file for a mod. Only files offered for the pack's Minecraft
/// version can be selected.
pub fn select_file(state: &mut AppState, addon_id: AddonId, file_id: FileId) -> PackResult<ModInfo> {
    let m = state
        .registry
        .get_mut(addon_id)
        .ok_or(PackError::ModNotFound(addon_id))?;
    if m.file(file_id).is_none() {
        return Err(PackError::FileNotFound { addon_id, file_id });
    }

    let minecraft_version = state
        .minecraft_version
        .as_deref()
        .ok_or(PackError::MissingSelection("Minecraft version"))?;
    let offered = file_choices(m, Some(minecraft_version))
        .files()
        .iter()
        .any(|choice| choice.file_id == file_id);
    if !offered {
        return Err(PackError::FileNotOffered {
            addon_id,
            file_id,
            minecraft_version: minecraft_version.to_string(),
        });
    }

    m.select_file(file_id)?;
    info!("Set file for {} to {}", m.name, file_id);
    mod_info(state, addon_id)
}

/// Generate manifest and credits in memory, then write the pack.
pub async fn export_modpack(state: &AppState) -> PackResult<ExportSummary> {
    let bundle = ExportBundle::build(
        &state.pack,
        state.minecraft_version.as_deref(),
        state.loader_version.as_deref(),
        &state.registry,
    )?;

    let root = state.output_root();
    let folder = pack_folder_name(&state.pack.name);
    let archive = state.settings.zip_pack;
    let pack_dir = bundle.write_to(&root, &folder, archive).await?;

    Ok(ExportSummary {
        pack_dir: pack_dir.to_string_lossy().to_string(),
        archive: archive.then(|| {
            root.join(format!("{}.zip", folder))
                .to_string_lossy()
                .to_string()
        }),
        mod_count: bundle.manifest.files.len(),
    })
}

fn mod_info(state: &AppState, addon_id: AddonId) -> PackResult<ModInfo> {
    state
        .registry
        .get(addon_id)
        .map(|m| ModInfo::from_mod(m, state.minecraft_version.as_deref()))
        .ok_or(PackError::ModNotFound(addon_id))
}
