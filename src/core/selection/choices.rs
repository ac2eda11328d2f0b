use serde::Serialize;

use super::version::compare_versions;
use crate::core::catalog::{FileId, LoaderVersionSummary};
use crate::core::pack::{Mod, ReleaseType};

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FileChoice {
    pub file_id: FileId,
    pub file_name: String,
    pub release_type: ReleaseType,
    /// e.g. `"jei_1.12.2-4.16.1.301.jar (Release)"`
    pub label: String,
}

/// Files a user can pick for one mod.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", content = "files", rename_all = "snake_case")]
pub enum FileChoices {
    /// No Minecraft version has been chosen yet.
    NoMinecraftVersion,
    /// The mod has no files for the chosen Minecraft version.
    NoFiles,
    Available(Vec<FileChoice>),
}

impl FileChoices {
    pub fn files(&self) -> &[FileChoice] {
        match self {
            FileChoices::Available(files) => files,
            _ => &[],
        }
    }
}

/// Files of `m` tagged with `minecraft_version`, newest first.
pub fn file_choices(m: &Mod, minecraft_version: Option<&str>) -> FileChoices {
    let Some(version) = minecraft_version else {
        return FileChoices::NoMinecraftVersion;
    };

    let mut files: Vec<_> = m
        .files
        .iter()
        .filter(|f| f.is_for_minecraft(version))
        .collect();

    if files.is_empty() {
        return FileChoices::NoFiles;
    }

    files.sort_by(|a, b| compare_versions(&b.file_name, &a.file_name));

    FileChoices::Available(
        files
            .into_iter()
            .map(|f| FileChoice {
                file_id: f.id,
                file_name: f.file_name.clone(),
                release_type: f.release_type,
                label: format!("{} ({})", f.file_name, f.release_type.label()),
            })
            .collect(),
    )
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LoaderChoice {
    /// Loader id as written to the manifest, e.g. `"forge-14.23.5.2847"`.
    pub version: String,
    pub label: String,
    pub recommended: bool,
    pub latest: bool,
}

/// Loader versions available for `minecraft_version`, newest first.
pub fn loader_choices(entries: &[LoaderVersionSummary], minecraft_version: &str) -> Vec<LoaderChoice> {
    let mut matching: Vec<_> = entries
        .iter()
        .filter(|e| e.game_version == minecraft_version)
        .collect();

    matching.sort_by(|a, b| compare_versions(&b.name, &a.name));

    matching
        .into_iter()
        .map(|e| {
            let label = match (e.recommended, e.latest) {
                (true, true) => format!("{} (Recommended, Latest)", e.name),
                (true, false) => format!("{} (Recommended)", e.name),
                (false, true) => format!("{} (Latest)", e.name),
                (false, false) => e.name.clone(),
            };
            LoaderChoice {
                version: e.name.clone(),
                label,
                recommended: e.recommended,
                latest: e.latest,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::testing::{addon, file};
    use crate::core::pack::ModFile;

    fn mod_with_files() -> Mod {
        let mut m = Mod::from_summary(&addon(1, "JEI"));
        let mut beta = file(12, "jei_1.12.2-4.16.1.jar", &[]);
        beta.release_type = 2;
        let mut other_mc = file(13, "jei_1.16.5-7.0.0.jar", &[]);
        other_mc.game_version = vec!["1.16.5".into(), "Forge".into()];
        let mut ambiguous = file(14, "jei_multi-9.0.0.jar", &[]);
        ambiguous.game_version = vec!["1.12.2".into(), "1.12.1".into()];

        for summary in [
            file(11, "jei_1.12.2-4.15.0.jar", &[]),
            beta,
            other_mc,
            ambiguous,
        ] {
            m.files.push(ModFile::from_summary(1, &summary, "Forge"));
        }
        m
    }

    #[test]
    fn no_minecraft_version_selected() {
        assert_eq!(
            file_choices(&mod_with_files(), None),
            FileChoices::NoMinecraftVersion
        );
    }

    #[test]
    fn no_files_for_version() {
        assert_eq!(
            file_choices(&mod_with_files(), Some("1.7.10")),
            FileChoices::NoFiles
        );
    }

    #[test]
    fn files_filtered_sorted_and_labelled() {
        let choices = file_choices(&mod_with_files(), Some("1.12.2"));
        let labels: Vec<&str> = choices.files().iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "jei_1.12.2-4.16.1.jar (Beta)",
                "jei_1.12.2-4.15.0.jar (Release)"
            ]
        );
    }

    #[test]
    fn loader_choices_filter_sort_and_mark() {
        let entries = vec![
            LoaderVersionSummary {
                name: "forge-14.23.5.2768".into(),
                game_version: "1.12.2".into(),
                recommended: true,
                latest: false,
            },
            LoaderVersionSummary {
                name: "forge-14.23.5.2847".into(),
                game_version: "1.12.2".into(),
                recommended: false,
                latest: true,
            },
            LoaderVersionSummary {
                name: "forge-36.2.39".into(),
                game_version: "1.16.5".into(),
                recommended: true,
                latest: true,
            },
        ];

        let choices = loader_choices(&entries, "1.12.2");
        let labels: Vec<&str> = choices.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "forge-14.23.5.2847 (Latest)",
                "forge-14.23.5.2768 (Recommended)"
            ]
        );

        let choices = loader_choices(&entries, "1.16.5");
        assert_eq!(choices[0].label, "forge-36.2.39 (Recommended, Latest)");
        assert!(loader_choices(&entries, "1.7.10").is_empty());
    }
}
