pub mod adapter;
pub mod mapper;
pub mod models;
pub mod queries;

pub use adapter::{HqNowAdapter, REPO_NAME, REPO_TAG, REPO_URL};
