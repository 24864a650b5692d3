//! Dowel - an in-memory issue tracking core.
//!
//! This crate provides the domain model and storage layer for a small
//! issue tracking service. The interesting part is the query pipeline
//! (filter, then sort, then paginate) implemented by the in-memory
//! storage backend; CRUD itself is a direct map operation.

#![forbid(unsafe_code)]

pub mod domain;
pub mod error;
pub mod seed;
pub mod storage;
