use std::path::PathBuf;
use thiserror::Error;

use crate::core::catalog::{AddonId, FileId};

/// Central error type for the modpack builder.
/// Every fallible operation returns `Result<T, PackError>`.
#[derive(Debug, Error)]
pub enum PackError {
    // ── IO ──────────────────────────────────────────────
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    // ── Network ─────────────────────────────────────────
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Catalog lookup failed for {url}: HTTP {status}")]
    CatalogStatus { url: String, status: u16 },

    // ── JSON ────────────────────────────────────────────
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ── Archive ─────────────────────────────────────────
    #[error("Zip archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    // ── Pack ────────────────────────────────────────────
    #[error("Mod not found in pack: {0}")]
    ModNotFound(AddonId),

    #[error("File {file_id} does not belong to mod {addon_id}")]
    FileNotFound { addon_id: AddonId, file_id: FileId },

    #[error("File {file_id} of mod {addon_id} is not available for Minecraft {minecraft_version}")]
    FileNotOffered {
        addon_id: AddonId,
        file_id: FileId,
        minecraft_version: String,
    },

    #[error("No {0} selected")]
    MissingSelection(&'static str),

    // ── Generic ─────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type PackResult<T> = Result<T, PackError>;

impl From<std::io::Error> for PackError {
    fn from(source: std::io::Error) -> Self {
        PackError::Io {
            path: PathBuf::new(),
            source,
        }
    }
}
