//! Host-facing plugin surface: record shapes and the plugin trait.

pub mod records;
pub mod traits;

pub use records::{Chapter, Comic, ComicDetails, PageRef};
pub use traits::RepoPlugin;
