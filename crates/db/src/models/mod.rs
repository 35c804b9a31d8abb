//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - `Serialize` projections where a row is returned to API clients
//! - Create / update DTOs taking already-validated values

pub mod admin;
pub mod article;
pub mod inquiry;
pub mod settings;
pub mod testimonial;
