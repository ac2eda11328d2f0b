use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::catalog::{DEFAULT_API_BASE, MINECRAFT_GAME_ID};
use crate::core::http::APP_USER_AGENT;

const APP_DIR_NAME: &str = "PackCrafter";
const SETTINGS_FILE: &str = "settings.json";

/// Tool settings. These describe how PackCrafter talks to the catalog and
/// where it writes packs; they are not part of any modpack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_base: String,
    pub game_id: u32,
    pub user_agent: String,
    /// Game-version tag naming the mod loader rather than a Minecraft version.
    pub loader_tag: String,
    /// Search results outside this category section are hidden.
    pub mods_category: String,
    /// Overrides the platform download directory as export root.
    pub output_dir: Option<PathBuf>,
    /// Also write `<pack>.zip` next to the exported folder.
    pub zip_pack: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            game_id: MINECRAFT_GAME_ID,
            user_agent: APP_USER_AGENT.to_string(),
            loader_tag: "Forge".to_string(),
            mods_category: "Mods".to_string(),
            output_dir: None,
            zip_pack: false,
        }
    }
}

impl Settings {
    /// Load `<config dir>/PackCrafter/settings.json`, falling back to the
    /// defaults when it is absent or unreadable.
    pub fn load() -> Self {
        let path = settings_path();
        load_settings_from_disk(&path).unwrap_or_default()
    }
}

fn settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join(SETTINGS_FILE)
}

fn load_settings_from_disk(path: &Path) -> Option<Settings> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => {
            debug!("No settings at {:?}, using defaults", path);
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(settings) => Some(settings),
        Err(e) => {
            warn!("Ignoring corrupt settings at {:?}: {}", path, e);
            None
        }
    }
}
