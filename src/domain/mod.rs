//! Domain layer: the post entity, read-side ordering/filtering, and the
//! in-memory store that owns the collection.

pub mod post;
pub mod post_id;
pub mod post_query;
pub mod post_store;

pub use post::{NewPost, Post, PostPatch};
pub use post_id::PostId;
pub use post_query::{PostFilter, PostOrdering, SortDirection, SortField};
pub use post_store::PostStore;
