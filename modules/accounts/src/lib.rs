//! Accounts module
//!
//! Users, roles and login. Stores salted password hashes, answers login with
//! an HS256 bearer token, and gates every user-management endpoint behind
//! the admin role. Other modules resolve user references through the
//! [`contract::AccountsApi`] client.

// Public exports
pub mod contract;
pub use contract::{AccountsApi, AccountsError, NewUser, UpdateUser, User, UserListFilter};

pub mod module;
pub use module::AccountsModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
