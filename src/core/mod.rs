// ─── PackCrafter Core ───
// Backend for building a Minecraft modpack from the addon catalog.
//
// Architecture:
//   core/
//     catalog/   — Catalog trait + HTTP client for the addon API
//     pack/      — Mod/File model, registry, dependency resolver
//     selection/ — Version ordering, file and loader choices
//     export/    — manifest.json, credits.html, pack folder/zip
//     state/     — Settings + session state

pub mod catalog;
pub mod error;
pub mod export;
pub mod http;
pub mod pack;
pub mod selection;
pub mod state;
