//! Domain logic shared by the persistence layer and the HTTP boundary.
//!
//! Nothing in this crate performs I/O except through the [`blob::BlobStore`]
//! trait, so every rule here can be unit tested in isolation.

pub mod admin;
pub mod article;
pub mod blob;
pub mod error;
pub mod inquiry;
pub mod pagination;
pub mod secret_key;
pub mod types;
