//! Course catalog core types and utilities

pub mod config;
pub mod error;
pub mod format;
pub mod session;

pub use config::{ApiConfig, SessionConfig};
pub use error::{Error, Result};
pub use format::{format_date, format_duration};
pub use session::{MemoryTokenStore, Session, SessionAction, SessionStore, TokenStore};
