use std::collections::HashMap;

use tracing::info;

use super::model::Mod;
use crate::core::catalog::AddonId;

/// Deduplicating, insertion-ordered collection of the mods in a pack.
///
/// Mods live in an arena (`mods`) and are looked up through `index`.
/// Dependency edges refer to mods by id, so removing a mod leaves
/// any edge pointing at it dangling.
#[derive(Debug, Default)]
pub struct ModRegistry {
    mods: Vec<Mod>,
    index: HashMap<AddonId, usize>,
}

impl ModRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `m` unless its id is already present. Returns whether the mod
    /// was inserted; an existing entry is always kept.
    pub fn add(&mut self, m: Mod) -> bool {
        if self.index.contains_key(&m.id) {
            info!("{} is already in the pack", m.name);
            return false;
        }

        info!("Adding mod {}", m);
        self.index.insert(m.id, self.mods.len());
        self.mods.push(m);
        true
    }

    pub fn contains(&self, id: AddonId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn get(&self, id: AddonId) -> Option<&Mod> {
        self.index.get(&id).map(|&i| &self.mods[i])
    }

    pub fn get_mut(&mut self, id: AddonId) -> Option<&mut Mod> {
        match self.index.get(&id) {
            Some(&i) => self.mods.get_mut(i),
            None => None,
        }
    }

    pub fn remove(&mut self, id: AddonId) -> Option<Mod> {
        let position = self.index.remove(&id)?;
        let removed = self.mods.remove(position);

        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }

        info!("Removed mod {}", removed);
        Some(removed)
    }

    /// `(id, mod)` pairs in insertion order.
    pub fn items(&self) -> impl Iterator<Item = (AddonId, &Mod)> + '_ {
        self.mods.iter().map(|m| (m.id, m))
    }

    pub fn items_mut(&mut self) -> impl Iterator<Item = &mut Mod> + '_ {
        self.mods.iter_mut()
    }

    /// Mods that have a file selected, in insertion order.
    pub fn selected(&self) -> impl Iterator<Item = &Mod> + '_ {
        self.mods.iter().filter(|m| m.selected_file().is_some())
    }

    pub fn len(&self) -> usize {
        self.mods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mods.is_empty()
    }
}
