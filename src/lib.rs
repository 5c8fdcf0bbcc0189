//! File Gateway service
//!
//! Issues presigned S3 URLs so that clients upload and download files
//! directly against the bucket instead of streaming bytes through this
//! service.

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// S3 presigned URL issuance
pub mod object_storage;

/// HTTP routes and handlers
pub mod routes;

/// HTTP server setup
pub mod server;

/// Environment configuration and error types
pub mod types;
