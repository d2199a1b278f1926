//! Authentication module

pub mod context;
pub mod storage;

// Re-export commonly used items
pub use context::{
    AuthAction, AuthContext, AuthProvider, SessionContextData, use_auth, use_try_auth,
};
pub use storage::LocalTokenStore;
