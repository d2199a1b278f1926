//! Course catalog HTTP clients
//!
//! Typed access to the headless content API (paginated course collections)
//! and its identity endpoints (register, login, current user). Every call
//! returns a [`Result`] whose error is a [`client::error::ClientError`].

#[macro_use]
extern crate tracing;

pub mod client;
pub mod types;

pub use client::error::{ClientError, ErrorKind};
pub use client::{AuthenticatedCatalogClient, PublicCatalogClient, TypedClientBuilder};

pub type Result<T> = std::result::Result<T, ClientError>;
