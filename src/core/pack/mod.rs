pub mod model;
pub mod registry;
pub mod resolver;

pub use crate::core::catalog::{AddonId, FileId};
pub use model::{
    extract_minecraft_version, Dependency, DependencyError, DependencyKind, Mod, ModFile,
    ReleaseType, VersionTagError,
};
pub use registry::ModRegistry;
pub use resolver::DependencyResolver;
