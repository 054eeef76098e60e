pub mod hqnow;

pub use hqnow::HqNowAdapter;
