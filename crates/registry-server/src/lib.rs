//! Member registry service - membership registration over HTTP.
//!
//! Accepts pending member submissions, lists them, approves them into
//! a roster with initialized share-holding fields, and serves static
//! front-end assets. Durable state is a single JSON document managed
//! by `registry-store`.

pub mod api;
pub mod config;
pub mod error;

pub use config::Config;
pub use error::ServiceError;
