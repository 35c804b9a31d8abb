//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod admin_repo;
pub mod article_repo;
pub mod inquiry_repo;
pub mod settings_repo;
pub mod testimonial_repo;

pub use admin_repo::AdminRepo;
pub use article_repo::ArticleRepo;
pub use inquiry_repo::InquiryRepo;
pub use settings_repo::SettingsRepo;
pub use testimonial_repo::TestimonialRepo;
