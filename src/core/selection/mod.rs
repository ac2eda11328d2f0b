mod choices;
mod version;

pub use choices::{file_choices, loader_choices, FileChoice, FileChoices, LoaderChoice};
pub use version::compare_versions;
