//! Application services - orchestration over the ports.

mod fetcher;
mod posts;

#[cfg(test)]
mod testing;

pub use fetcher::MetadataFetcher;
pub use posts::{IngestedPost, PostService};
