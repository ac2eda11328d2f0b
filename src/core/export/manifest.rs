use serde::{Deserialize, Serialize};

use super::PackMetadata;
use crate::core::catalog::{AddonId, FileId};
use crate::core::error::{PackError, PackResult};
use crate::core::pack::ModRegistry;

pub const MANIFEST_VERSION: u32 = 1;
pub const OVERRIDES_DIR: &str = "overrides";

/// `manifest.json` of a CurseForge-style modpack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub minecraft: MinecraftSection,
    pub manifest_type: ManifestType,
    pub manifest_version: u32,
    pub name: String,
    pub version: String,
    pub author: String,
    pub files: Vec<ManifestFile>,
    pub overrides: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinecraftSection {
    pub version: String,
    pub mod_loaders: Vec<ModLoader>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModLoader {
    pub id: String,
    pub primary: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ManifestType {
    MinecraftModpack,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestFile {
    #[serde(rename = "projectID")]
    pub project_id: AddonId,
    #[serde(rename = "fileID")]
    pub file_id: FileId,
    pub required: bool,
}

impl Manifest {
    /// Build the manifest from the mods that have a selected file, in pack
    /// order. Fails when no Minecraft version has been chosen.
    pub fn build(
        meta: &PackMetadata,
        minecraft_version: Option<&str>,
        loader_version: Option<&str>,
        registry: &ModRegistry,
    ) -> PackResult<Self> {
        let version = minecraft_version.ok_or(PackError::MissingSelection("Minecraft version"))?;

        let mod_loaders = loader_version
            .map(|id| {
                vec![ModLoader {
                    id: id.to_string(),
                    primary: true,
                }]
            })
            .unwrap_or_default();

        let files = registry
            .selected()
            .filter_map(|m| {
                m.selected_file().map(|f| ManifestFile {
                    project_id: m.id,
                    file_id: f.id,
                    required: true,
                })
            })
            .collect();

        Ok(Self {
            minecraft: MinecraftSection {
                version: version.to_string(),
                mod_loaders,
            },
            manifest_type: ManifestType::MinecraftModpack,
            manifest_version: MANIFEST_VERSION,
            name: meta.name.clone(),
            version: meta.version.clone(),
            author: meta.author.clone(),
            files,
            overrides: OVERRIDES_DIR.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::testing::{addon, file};
    use crate::core::pack::{Mod, ModFile};

    fn registry_with_one_selection() -> ModRegistry {
        let mut registry = ModRegistry::new();
        for (id, file_id) in [(1, 11), (2, 21)] {
            let mut m = Mod::from_summary(&addon(id, "m"));
            m.files.push(ModFile::from_summary(
                id,
                &file(file_id, "m-1.0.jar", &[]),
                "Forge",
            ));
            registry.add(m);
        }
        registry.get_mut(2).unwrap().select_file(21).unwrap();
        registry
    }

    fn meta() -> PackMetadata {
        PackMetadata {
            name: "Skyfactory Lite".into(),
            version: "1.0.0".into(),
            author: "steve".into(),
        }
    }

    #[test]
    fn only_mods_with_selected_file_are_listed() {
        let manifest = Manifest::build(
            &meta(),
            Some("1.12.2"),
            Some("forge-14.23.5.2847"),
            &registry_with_one_selection(),
        )
        .unwrap();

        assert_eq!(
            manifest.files,
            vec![ManifestFile {
                project_id: 2,
                file_id: 21,
                required: true
            }]
        );
    }

    #[test]
    fn serialized_shape_matches_modpack_format() {
        let manifest = Manifest::build(
            &meta(),
            Some("1.12.2"),
            Some("forge-14.23.5.2847"),
            &registry_with_one_selection(),
        )
        .unwrap();

        let value = serde_json::to_value(&manifest).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "minecraft": {
                    "version": "1.12.2",
                    "modLoaders": [{"id": "forge-14.23.5.2847", "primary": true}]
                },
                "manifestType": "minecraftModpack",
                "manifestVersion": 1,
                "name": "Skyfactory Lite",
                "version": "1.0.0",
                "author": "steve",
                "files": [{"projectID": 2, "fileID": 21, "required": true}],
                "overrides": "overrides"
            })
        );
    }

    #[test]
    fn missing_minecraft_version_fails() {
        let result = Manifest::build(&meta(), None, None, &ModRegistry::new());
        assert!(matches!(result, Err(PackError::MissingSelection(_))));
    }

    #[test]
    fn no_loader_means_empty_loader_list() {
        let manifest = Manifest::build(&meta(), Some("1.12.2"), None, &ModRegistry::new()).unwrap();
        assert!(manifest.minecraft.mod_loaders.is_empty());
        assert!(manifest.files.is_empty());
    }
}
