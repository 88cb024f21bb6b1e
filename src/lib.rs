//! # blog-posts
//!
//! In-memory blog post CRUD API with a static presentation front-end.
//!
//! The post API lists (optionally sorted), creates, updates, deletes and
//! searches posts held in process memory. A second binary serves the
//! single page that consumes the API from the browser.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── PostService (service/)
//!     │
//!     └── PostStore (domain/)
//!
//! Browser ── static page (frontend/) ──► REST Handlers
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod frontend;
pub mod service;
pub mod shutdown;
pub mod telemetry;
