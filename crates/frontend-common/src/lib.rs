pub mod auth;
pub mod client;
pub mod components;
pub mod hooks;
pub mod services;

pub use auth::{AuthContext, AuthProvider, use_auth, use_try_auth};
pub use client::{configure_api, create_public_client};
pub use components::{LoadingSpinner, Logo, Navbar, PrimaryButton};
