use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;

use tracing::{debug, info, warn};

use super::model::{Dependency, DependencyError, DependencyKind, Mod, ModFile};
use super::registry::ModRegistry;
use crate::core::catalog::{AddonId, AddonSummary, Catalog, FileDependency};
use crate::core::error::PackResult;

/// Builds mods from catalog records and discovers their required
/// dependencies recursively, registering each one in a [`ModRegistry`].
pub struct DependencyResolver<'c> {
    catalog: &'c dyn Catalog,
    /// Game-version tag that names the loader rather than a Minecraft version.
    loader_tag: String,
    /// Mods whose construction has started but not finished. Reaching one of
    /// these again through a required dependency is a cycle.
    in_progress: HashSet<AddonId>,
}

impl<'c> DependencyResolver<'c> {
    pub fn new(catalog: &'c dyn Catalog, loader_tag: impl Into<String>) -> Self {
        Self {
            catalog,
            loader_tag: loader_tag.into(),
            in_progress: HashSet::new(),
        }
    }

    /// Add a mod chosen from search results, together with everything it
    /// requires. Adding a mod that is already registered is a no-op.
    pub async fn add_mod(
        &mut self,
        registry: &mut ModRegistry,
        summary: AddonSummary,
    ) -> PackResult<AddonId> {
        if registry.contains(summary.id) {
            info!("{} is already in the pack", summary.name);
            return Ok(summary.id);
        }

        let m = self.build_mod(registry, summary).await?;
        let id = m.id;
        registry.add(m);
        Ok(id)
    }

    /// Add a mod known only by id; its summary is looked up first.
    pub async fn add_mod_by_id(
        &mut self,
        registry: &mut ModRegistry,
        addon_id: AddonId,
    ) -> PackResult<AddonId> {
        if registry.contains(addon_id) {
            info!("Mod {} is already in the pack", addon_id);
            return Ok(addon_id);
        }

        let summary = self.catalog.get_addon_info(addon_id).await?;
        self.add_mod(registry, summary).await
    }

    /// Internal recursive builder. The returned mod is not registered yet;
    /// its dependencies are.
    fn build_mod<'a>(
        &'a mut self,
        registry: &'a mut ModRegistry,
        summary: AddonSummary,
    ) -> Pin<Box<dyn Future<Output = PackResult<Mod>> + Send + 'a>> {
        Box::pin(async move {
            let mut m = Mod::from_summary(&summary);
            self.in_progress.insert(m.id);

            let file_summaries = match self.catalog.get_addon_files(m.id).await {
                Ok(files) => files,
                Err(e) => {
                    self.in_progress.remove(&m.id);
                    return Err(e);
                }
            };

            debug!("{} has {} files", m.name, file_summaries.len());

            for file_summary in &file_summaries {
                let mut file = ModFile::from_summary(m.id, file_summary, &self.loader_tag);
                if let Err(e) = &file.minecraft_version {
                    debug!("File {} of {}: {}", file.file_name, m.name, e);
                }

                for dep in &file_summary.dependencies {
                    self.link_dependency(registry, &mut file, dep).await;
                }

                m.files.push(file);
            }

            self.in_progress.remove(&m.id);
            Ok(m)
        })
    }

    /// Record one dependency edge on `file`, discovering the target mod when
    /// it is required and unknown. Failures only drop this edge.
    async fn link_dependency(
        &mut self,
        registry: &mut ModRegistry,
        file: &mut ModFile,
        dep: &FileDependency,
    ) {
        let target = dep.addon_id;

        let kind = match DependencyKind::from_code(dep.kind) {
            Some(kind) => kind,
            None => {
                debug!(
                    "Ignoring dependency {} of type {} on {}",
                    target, dep.kind, file.file_name
                );
                return;
            }
        };

        if file.depends_on(target) {
            return;
        }

        if registry.contains(target) {
            file.dependencies.push(Dependency {
                addon_id: target,
                kind,
            });
            return;
        }

        if kind == DependencyKind::Optional {
            debug!(
                "Optional dependency {} of {} is not in the pack (skipping)",
                target, file.file_name
            );
            return;
        }

        if self.in_progress.contains(&target) {
            warn!(
                "Dependency cycle: {} requires mod {} which is still being resolved",
                file.file_name, target
            );
            file.dependency_issues.push(DependencyError::Cycle(target));
            return;
        }

        match self.discover(registry, target).await {
            Ok(()) => file.dependencies.push(Dependency {
                addon_id: target,
                kind,
            }),
            Err(e) => {
                warn!(
                    "Could not resolve dependency {} of {}: {}",
                    target, file.file_name, e
                );
                file.dependency_issues.push(DependencyError::LookupFailed {
                    addon_id: target,
                    reason: e.to_string(),
                });
            }
        }
    }

    async fn discover(&mut self, registry: &mut ModRegistry, addon_id: AddonId) -> PackResult<()> {
        let summary = self.catalog.get_addon_info(addon_id).await?;
        let m = self.build_mod(registry, summary).await?;
        info!("Found new mod dependency {}", m.name);
        registry.add(m);
        Ok(())
    }
}
