//! Service layer: business logic orchestration.
//!
//! [`PostService`] validates incoming operations and delegates storage to
//! the [`super::domain::PostStore`].

pub mod post_service;

pub use post_service::PostService;
