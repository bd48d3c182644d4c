//! hostsd Infrastructure Layer
//!
//! Adapters behind the application ports: the in-memory record store and
//! blacklist, the file-backed table source, and the hickory request handler.
pub mod dns;
pub mod repositories;
pub mod tables;
