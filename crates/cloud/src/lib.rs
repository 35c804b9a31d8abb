//! Object storage backends for uploaded images.

pub mod r2;

pub use r2::{R2BlobStore, R2Config};
