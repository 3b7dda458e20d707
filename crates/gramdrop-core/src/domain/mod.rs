//! Domain entities - the core business objects.

mod metadata;
mod post;

pub use metadata::{FetchedMetadata, MetadataSource, PostMetadata};
pub use post::{Post, PostStatus, PostUpdate, UnknownStatus};
