//! HQ Now repository plugin.
//!
//! Adapts the HQ Now comics catalog (a GraphQL endpoint) to the host's
//! repository plugin interface: default listing, name search, detail lookup
//! and chapter listing, each a single request/response exchange with the
//! remote catalog.

pub mod adapters;
pub mod plugin;
pub mod shared;

pub use adapters::hqnow::HqNowAdapter;
pub use plugin::{Chapter, Comic, ComicDetails, PageRef, RepoPlugin};
pub use shared::errors::{AppError, AppResult};
