//! Custom hooks for the application

pub mod use_user_name;

pub use use_user_name::use_user_name;
