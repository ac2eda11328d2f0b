mod credits;
mod manifest;
mod writer;

pub use credits::build_credits;
pub use manifest::{
    Manifest, ManifestFile, ManifestType, MinecraftSection, ModLoader, MANIFEST_VERSION,
    OVERRIDES_DIR,
};
pub use writer::{
    default_output_root, pack_folder_name, ExportBundle, CREDITS_FILE, MANIFEST_FILE,
    OVERRIDE_SUBDIRS,
};

use serde::{Deserialize, Serialize};

/// Pack details entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackMetadata {
    pub name: String,
    pub version: String,
    pub author: String,
}
