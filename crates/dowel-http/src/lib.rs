//! HTTP API for the dowel issue tracker.
//!
//! This crate is the transport boundary: it translates HTTP requests
//! into [`dowel::storage::IssueStorage`] calls and serializes the
//! results. All query logic lives in the `dowel` crate.
//!
//! # Endpoints
//!
//! - `GET /health` - liveness probe
//! - `GET /issues` - list with filter/sort/page query parameters
//! - `GET /issues/{id}` - fetch one issue
//! - `POST /issues` - create an issue (201)
//! - `PUT /issues/{id}` - overwrite an issue's mutable fields

pub mod error;
pub mod models;
pub mod server;

pub use server::{AppState, app_router};
