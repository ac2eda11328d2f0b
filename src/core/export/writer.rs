use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use tracing::info;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::credits::build_credits;
use super::manifest::{Manifest, OVERRIDES_DIR};
use super::PackMetadata;
use crate::core::error::{PackError, PackResult};
use crate::core::pack::ModRegistry;

pub const MANIFEST_FILE: &str = "manifest.json";
pub const CREDITS_FILE: &str = "credits.html";
pub const OVERRIDE_SUBDIRS: [&str; 4] = ["mods", "config", "resources", "scripts"];

/// Everything an export writes, generated fully in memory first so that a
/// failure never leaves a half-written pack behind.
#[derive(Debug, Clone)]
pub struct ExportBundle {
    pub manifest: Manifest,
    pub manifest_json: String,
    pub credits_html: String,
}

impl ExportBundle {
    pub fn build(
        meta: &PackMetadata,
        minecraft_version: Option<&str>,
        loader_version: Option<&str>,
        registry: &ModRegistry,
    ) -> PackResult<Self> {
        let manifest = Manifest::build(meta, minecraft_version, loader_version, registry)?;
        let manifest_json = serde_json::to_string_pretty(&manifest)?;
        let credits_html = build_credits(meta, minecraft_version, loader_version, registry);

        Ok(Self {
            manifest,
            manifest_json,
            credits_html,
        })
    }

    /// Write the pack under `output_root/<folder>/`:
    ///
    /// - `manifest.json`
    /// - `credits.html`
    /// - `overrides/{mods,config,resources,scripts}/`
    ///
    /// With `archive` set, `output_root/<folder>.zip` holds the same layout.
    /// Returns the pack folder.
    pub async fn write_to(
        &self,
        output_root: &Path,
        folder: &str,
        archive: bool,
    ) -> PackResult<PathBuf> {
        let archive_bytes = if archive {
            Some(self.build_archive()?)
        } else {
            None
        };

        let pack_dir = output_root.join(folder);
        let overrides = pack_dir.join(OVERRIDES_DIR);
        let [mods, config, resources, scripts] = OVERRIDE_SUBDIRS.map(|sub| overrides.join(sub));

        tokio::try_join!(
            create_dir_safe(&mods),
            create_dir_safe(&config),
            create_dir_safe(&resources),
            create_dir_safe(&scripts),
        )?;

        write_safe(&pack_dir.join(MANIFEST_FILE), self.manifest_json.as_bytes()).await?;
        write_safe(&pack_dir.join(CREDITS_FILE), self.credits_html.as_bytes()).await?;

        if let Some(bytes) = archive_bytes {
            let zip_path = output_root.join(format!("{}.zip", folder));
            write_safe(&zip_path, &bytes).await?;
            info!("Wrote modpack archive {:?}", zip_path);
        }

        info!(
            "Exported modpack '{}' with {} mods to {:?}",
            self.manifest.name,
            self.manifest.files.len(),
            pack_dir
        );
        Ok(pack_dir)
    }

    fn build_archive(&self) -> PackResult<Vec<u8>> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for sub in OVERRIDE_SUBDIRS {
            writer.add_directory(format!("{}/{}/", OVERRIDES_DIR, sub), options)?;
        }

        writer.start_file(MANIFEST_FILE, options)?;
        writer.write_all(self.manifest_json.as_bytes())?;

        writer.start_file(CREDITS_FILE, options)?;
        writer.write_all(self.credits_html.as_bytes())?;

        Ok(writer.finish()?.into_inner())
    }
}

/// Folder name for a pack; path separators are replaced and an empty name
/// falls back to `modpack`.
pub fn pack_folder_name(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();

    if cleaned.is_empty() || cleaned == "." || cleaned == ".." {
        "modpack".to_string()
    } else {
        cleaned
    }
}

/// Platform download directory, or `~/Downloads` when the platform has none.
pub fn default_output_root() -> PathBuf {
    dirs::download_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
        .unwrap_or_else(|| PathBuf::from("."))
}

async fn create_dir_safe(path: &Path) -> PackResult<()> {
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|source| PackError::Io {
            path: path.to_path_buf(),
            source,
        })
}

async fn write_safe(path: &Path, contents: &[u8]) -> PackResult<()> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|source| PackError::Io {
            path: path.to_path_buf(),
            source,
        })
}
