//! Users Domain
//!
//! Customer profile schema with validation rules.

pub mod models;

pub use models::User;
