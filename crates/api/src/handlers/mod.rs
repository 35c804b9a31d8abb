pub mod admin;
pub mod admin_articles;
pub mod articles;
pub mod inquiries;
pub mod settings;
pub mod testimonials;
pub mod uploads;
